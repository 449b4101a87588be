// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashSet;

use log::{debug, trace};

use super::{
    helper_constants::DEFAULT_REGION_FALLBACKS, options::ResolvePhoneConfig,
    results::ResolvedPhoneNumber,
};
use crate::interfaces::ParserApi;

/// Ordered, de-duplicated regions to hint the parser with: the default
/// country, the caller fallbacks, then the built-in fallback list.
pub fn candidate_countries(config: &ResolvePhoneConfig) -> Vec<&str> {
    let mut seen = HashSet::new();
    config
        .default_country
        .iter()
        .chain(config.fallback_countries.iter())
        .map(String::as_str)
        .chain(DEFAULT_REGION_FALLBACKS.iter().copied())
        .filter(|code| !code.is_empty() && seen.insert(*code))
        .collect()
}

/// Parses `raw` directly, falling back to region-hinted parses in
/// [`candidate_countries`] order.
///
/// A structural parse is enough to win; validity is the caller's concern.
pub(crate) fn resolve(
    parser: &dyn ParserApi,
    raw: &str,
    config: &ResolvePhoneConfig,
) -> Option<ResolvedPhoneNumber> {
    if let Some(phone_number) = parser.parse(raw, None) {
        trace!("Parsed {:?} without a region hint", raw);
        return Some(ResolvedPhoneNumber {
            phone_number,
            used_fallback: None,
        });
    }

    for country in candidate_countries(config) {
        if let Some(phone_number) = parser.parse(raw, Some(country)) {
            debug!("Parsed {:?} using fallback country {}", raw, country);
            return Some(ResolvedPhoneNumber {
                phone_number,
                used_fallback: Some(country.to_owned()),
            });
        }
    }

    let last_chance = parser.parse(raw, None).map(|phone_number| ResolvedPhoneNumber {
        phone_number,
        used_fallback: None,
    });
    if last_chance.is_none() {
        debug!("No region produced a number for {:?}", raw);
    }
    last_chance
}

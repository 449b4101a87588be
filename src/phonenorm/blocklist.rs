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

use log::{trace, warn};

use super::options::PhoneBlockConfig;
use crate::{
    regexp_cache::BLOCKLIST_REGEX_CACHE,
    string_util::{ascii_digit_count, strip_whitespace},
};

/// Evaluates `value` against block/allow rules.
///
/// The value is canonicalised by removing whitespace; an empty canonical
/// value is never blocked. Rules are checked in order and the first that
/// fires decides:
///
/// 1. allow-list exact match: not blocked
/// 2. exact match: blocked
/// 3. literal prefix match: blocked
/// 4. resolved `country` in the blocked countries: blocked
/// 5. any pattern matches: blocked (patterns that fail to compile are skipped)
/// 6. digit count below `lengths.min` or above `lengths.max`: blocked
///
/// Length bounds count every digit of the canonical value, country code
/// included, unlike the national-number bounds of the validator.
pub fn is_blocked_number(value: &str, config: &PhoneBlockConfig, country: Option<&str>) -> bool {
    let canonical = strip_whitespace(value);
    if canonical.is_empty() {
        return false;
    }

    let listed = |entries: &[String]| entries.iter().any(|entry| strip_whitespace(entry) == canonical);

    if listed(&config.allow.exact) {
        trace!("{} is explicitly allowed", canonical);
        return false;
    }

    if listed(&config.exact) {
        trace!("{} matched an exact block entry", canonical);
        return true;
    }

    if let Some(prefix) = config.prefixes.iter().find(|prefix| canonical.starts_with(prefix.as_str())) {
        trace!("{} matched blocked prefix {}", canonical, prefix);
        return true;
    }

    if !config.countries.is_empty() {
        if let Some(country) = country {
            if config.countries.iter().any(|blocked| blocked == country) {
                trace!("{} belongs to blocked country {}", canonical, country);
                return true;
            }
        }
    }

    for pattern in &config.patterns {
        match BLOCKLIST_REGEX_CACHE.is_match(pattern, &canonical) {
            Ok(true) => {
                trace!("{} matched blocked pattern {}", canonical, pattern);
                return true;
            }
            Ok(false) => {}
            Err(err) => warn!("Skipping blocklist pattern {:?}: {}", pattern, err),
        }
    }

    let digits = ascii_digit_count(&canonical);
    if let Some(min) = config.lengths.min.filter(|min| *min > 0) {
        if digits < min {
            trace!("{} has {} digits, below {}", canonical, digits, min);
            return true;
        }
    }
    if let Some(max) = config.lengths.max.filter(|max| *max > 0) {
        if digits > max {
            trace!("{} has {} digits, above {}", canonical, digits, max);
            return true;
        }
    }

    false
}

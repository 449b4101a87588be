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

use log::trace;

use super::{
    blocklist::is_blocked_number,
    enums::ValidationCode,
    helper_constants::{MAX_PLAUSIBLE_DIGITS, MIN_PLAUSIBLE_DIGITS},
    options::PhoneValidationOptions,
    resolver::resolve,
    results::ValidationResult,
};
use crate::{interfaces::ParserApi, string_util::ascii_digit_count};

/// Returns true when the provided string is empty or only whitespace.
pub fn is_empty(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Cheap guard to avoid parsing obviously invalid strings: the input must
/// carry between 6 and 18 ASCII digits.
pub fn looks_like_phone(raw: &str) -> bool {
    (MIN_PLAUSIBLE_DIGITS..=MAX_PLAUSIBLE_DIGITS).contains(&ascii_digit_count(raw))
}

/// Runs every validation rule and collects each one that fails.
///
/// Only an implausible shape or an unresolvable number stops early. The
/// returned list is never empty: without failures it holds a single
/// [`ValidationCode::Valid`] entry.
pub(crate) fn validate(
    parser: &dyn ParserApi,
    raw: &str,
    options: &PhoneValidationOptions,
) -> Vec<ValidationResult> {
    let mut results = Vec::new();

    if is_empty(raw) {
        results.push(ValidationResult::failed(ValidationCode::Empty));
    }

    if !looks_like_phone(raw) {
        results.push(ValidationResult::failed(ValidationCode::InvalidFormat));
        return results;
    }

    let Some(resolved) = resolve(parser, raw, &options.resolve) else {
        results.push(ValidationResult::failed(ValidationCode::InvalidFormat));
        return results;
    };
    let number = &resolved.phone_number;
    let country = number.country.as_deref();
    let digits = number.national_number.len();

    if !number.valid {
        results.push(ValidationResult::failed(ValidationCode::InvalidFormat));
    }

    if digits > 0 && digits < options.min_length {
        results.push(ValidationResult::failed(ValidationCode::TooShort));
    }

    if digits > 0 && digits > options.max_length {
        results.push(ValidationResult::failed(ValidationCode::TooLong));
    }

    if options.rejects_country(country) {
        results.push(ValidationResult::failed(ValidationCode::CountryNotAllowed));
    }

    if country.is_none() {
        results.push(ValidationResult::failed(ValidationCode::UnknownRegion));
    }

    if is_blocked_number(&number.e164, options.blocklist(), country) {
        results.push(ValidationResult::failed(ValidationCode::Blocklisted));
    }

    if !options.allow_extensions && number.extension.is_some() {
        results.push(ValidationResult::failed(ValidationCode::ExtensionNotAllowed));
    }

    if results.is_empty() {
        results.push(ValidationResult::passed());
    }
    trace!(
        "Validated {:?}: {:?}",
        raw,
        results.iter().map(|r| r.validation_code).collect::<Vec<_>>()
    );
    results
}

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

use log::{debug, trace};

use super::{
    blocklist::is_blocked_number,
    enums::{ChangeCode, PhoneFormat},
    options::{PhoneNormOptions, PhoneValidationOptions, ResolvePhoneConfig},
    resolver::resolve,
    results::{PhoneMetadata, PhoneNormResult, ResolvedPhoneNumber, ValidationResult},
    transforms::{apply_symbol_map, merged_symbol_map, strip_extension, tidy_dial_string},
    validator::{is_empty, validate},
};
use crate::{interfaces::ParserApi, lib_parser::LibParser};

/// Entry point of the pipeline, bound to one parser implementation.
///
/// Holds no per-call state; every method is a pure function of its
/// arguments, so one instance can serve any number of threads.
pub struct PhoneNormaliser {
    /// Country-aware parser the pipeline delegates grammar work to.
    parser: Box<dyn ParserApi>,
}

impl PhoneNormaliser {
    pub fn new() -> Self {
        Self::with_parser(Box::new(LibParser::new()))
    }

    pub fn with_parser(parser: Box<dyn ParserApi>) -> Self {
        Self { parser }
    }

    /// Parses `raw` directly or through default/fallback regions.
    pub fn resolve(&self, raw: &str, config: &ResolvePhoneConfig) -> Option<ResolvedPhoneNumber> {
        resolve(self.parser.as_ref(), raw, config)
    }

    /// Itemized validation, see [`validate_phone`](super::validate_phone).
    pub fn validate(&self, raw: &str, options: &PhoneValidationOptions) -> Vec<ValidationResult> {
        validate(self.parser.as_ref(), raw, options)
    }

    /// Cleans, parses, gates and formats `raw`.
    ///
    /// Exits on the first terminal outcome: disabled passthrough, empty
    /// input, unparseable, blocked, country rejected, or success. Each
    /// transform that altered the input or each rejection is recorded as a
    /// [`ChangeCode`] in pipeline order.
    pub fn normalise(&self, raw: &str, options: &PhoneNormOptions) -> PhoneNormResult {
        let mut change_codes = Vec::new();
        let mut metadata = PhoneMetadata::default();

        if !options.enabled {
            return PhoneNormResult::build(Some(raw.to_owned()), true, None, change_codes, metadata);
        }

        let mut working = raw.trim().to_owned();
        if is_empty(&working) {
            change_codes.push(ChangeCode::InvalidShape);
            return PhoneNormResult::build(None, false, None, change_codes, metadata);
        }

        let symbol_map = merged_symbol_map(&options.symbol_map);
        let ascii = apply_symbol_map(&working, &symbol_map);
        if ascii.changed {
            trace!("Transliterated {:?} to {:?}", working, ascii.out);
            working = ascii.out;
            change_codes.push(ChangeCode::NormalisedSymbols);
        }

        // Silent cleanup, no change code.
        let tidied = tidy_dial_string(&working);
        if tidied.changed {
            working = tidied.out;
        }

        let mut extension = None;
        if options.strip_extensions {
            let split = strip_extension(&working);
            if split.changed {
                trace!("Stripped extension {:?} from {:?}", split.extension, working);
                working = split.out;
                extension = split.extension;
                change_codes.push(ChangeCode::StrippedExtension);
            }
        }

        let Some(resolved) = self.resolve(&working, &options.validation.resolve) else {
            debug!("Could not resolve {:?}", working);
            change_codes.push(ChangeCode::InvalidShape);
            return PhoneNormResult::build(None, false, None, change_codes, metadata);
        };
        let ResolvedPhoneNumber {
            phone_number: number,
            used_fallback,
        } = resolved;
        let country = number.country.clone();

        if used_fallback.is_some() {
            change_codes.push(ChangeCode::AppliedDefaultCountry);
        }

        if !number.valid {
            debug!("Parsed {:?} as {} but it is not a valid number", working, number.e164);
            change_codes.push(ChangeCode::InvalidShape);
            return PhoneNormResult::build(None, false, country, change_codes, metadata);
        }

        metadata.e164 = Some(number.e164.clone());
        metadata.international = Some(number.international.clone());
        metadata.national = Some(number.national.clone());
        metadata.extension = extension.or_else(|| number.extension.clone());
        metadata.number_type = number.number_type;

        if is_blocked_number(&number.e164, options.validation.blocklist(), country.as_deref()) {
            debug!("{} is blocked", number.e164);
            change_codes.push(ChangeCode::BlockedByList);
            return PhoneNormResult::build(metadata.e164.clone(), false, country, change_codes, metadata);
        }

        if options.validation.rejects_country(country.as_deref()) {
            debug!("{} is from a country that is not allowed: {:?}", number.e164, country);
            change_codes.push(ChangeCode::CountryNotAllowed);
            return PhoneNormResult::build(metadata.e164.clone(), false, country, change_codes, metadata);
        }

        let formatted = match options.format {
            PhoneFormat::E164 => number.e164,
            PhoneFormat::International => number.international,
            PhoneFormat::National => number.national,
            PhoneFormat::Rfc3966 => number.rfc3966,
        };
        if options.format != PhoneFormat::E164 {
            change_codes.push(ChangeCode::FormattedOutput);
        }

        let phone = Some(formatted)
            .filter(|value| !value.is_empty())
            .or_else(|| metadata.international.clone().filter(|value| !value.is_empty()))
            .or_else(|| metadata.national.clone());

        PhoneNormResult::build(phone, true, country, change_codes, metadata)
    }
}

impl Default for PhoneNormaliser {
    fn default() -> Self {
        Self::new()
    }
}

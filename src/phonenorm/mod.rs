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

mod blocklist;
mod helper_constants;
mod helper_types;
mod normaliser;
pub(crate) mod resolver;
mod transforms;
mod validator;
pub mod enums;
pub mod errors;
pub mod options;
pub mod reasons;
pub mod results;

use std::sync::LazyLock;

pub use blocklist::is_blocked_number;
pub use enums::{ChangeCode, NumberType, PhoneFormat, ValidationCode};
pub use helper_constants::{
    DEFAULT_BLOCKLIST, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_REGION_FALLBACKS,
    SYMBOL_TRANSLITERATION_MAP,
};
pub use normaliser::PhoneNormaliser;
pub use options::{
    AllowConfig, LengthBounds, PhoneBlockConfig, PhoneNormOptions, PhoneValidationOptions,
    ResolvePhoneConfig,
};
pub use reasons::{
    change_code_from_str, change_code_to_reason, validation_code_from_str, validation_code_to_reason,
};
pub use resolver::candidate_countries;
pub use results::{PhoneMetadata, PhoneNormResult, ResolvedPhoneNumber, ValidationResult};
pub use validator::{is_empty, looks_like_phone};

pub static PHONE_NORMALISER: LazyLock<PhoneNormaliser> = LazyLock::new(PhoneNormaliser::new);

/// Normalises `raw` with the default parser.
pub fn normalise_phone(raw: &str, options: &PhoneNormOptions) -> PhoneNormResult {
    PHONE_NORMALISER.normalise(raw, options)
}

/// Validates `raw` with the default parser and returns every failing rule.
pub fn validate_phone(raw: &str, options: &PhoneValidationOptions) -> Vec<ValidationResult> {
    PHONE_NORMALISER.validate(raw, options)
}

/// Resolves `raw` with the default parser.
pub fn resolve_phone_number(raw: &str, config: &ResolvePhoneConfig) -> Option<ResolvedPhoneNumber> {
    PHONE_NORMALISER.resolve(raw, config)
}

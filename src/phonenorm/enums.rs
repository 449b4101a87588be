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

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Output styles a normalised number can be rendered in.
///
/// For the Google Switzerland office number:
/// - **E164**: `+41446681800`
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **RFC3966**: `tel:+41-44-668-1800`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneFormat {
    /// Canonical form, `+` followed by the country code and the number.
    #[default]
    #[serde(rename = "E.164")]
    E164,
    /// Country code included, grouped with spaces for display.
    #[serde(rename = "INTERNATIONAL")]
    International,
    /// Dialing form inside the number's own country, with the national prefix.
    #[serde(rename = "NATIONAL")]
    National,
    /// `tel:` URI form with hyphen separators.
    #[serde(rename = "RFC3966")]
    Rfc3966,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberType {
    FixedLine,
    Mobile,
    /// Used in regions (e.g., the USA) where it's impossible to distinguish
    /// between fixed-line and mobile numbers by looking at the number itself.
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    VoIP,
    PersonalNumber,
    Pager,
    UAN,
    VoiceMail,
    Unknown,
}

/// One category of transform or rejection applied by the normaliser.
///
/// Codes accumulate in pipeline order and are never removed once recorded.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChangeCode {
    NormalisedSymbols,
    StrippedExtension,
    AppliedDefaultCountry,
    FormattedOutput,
    BlockedByList,
    CountryNotAllowed,
    InvalidShape,
}

impl ChangeCode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Human-readable reason reported next to the code.
    pub fn reason(self) -> &'static str {
        match self {
            ChangeCode::NormalisedSymbols => "Converted unicode digits and separators.",
            ChangeCode::StrippedExtension => "Removed phone extension text.",
            ChangeCode::AppliedDefaultCountry => "Applied default or fallback country code.",
            ChangeCode::FormattedOutput => "Formatted using the requested output style.",
            ChangeCode::BlockedByList => "Phone number is blocklisted.",
            ChangeCode::CountryNotAllowed => "Phone number country is not permitted.",
            ChangeCode::InvalidShape => "Phone number could not be parsed.",
        }
    }
}

/// Outcome tag of a single validation rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    Valid,
    Empty,
    InvalidFormat,
    Blocklisted,
    CountryNotAllowed,
    TooShort,
    TooLong,
    ExtensionNotAllowed,
    UnknownRegion,
}

impl ValidationCode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn reason(self) -> &'static str {
        match self {
            ValidationCode::Empty => "Phone number is empty.",
            ValidationCode::InvalidFormat => "Phone number is not in a valid format.",
            ValidationCode::Blocklisted => "Phone number is blocklisted.",
            ValidationCode::CountryNotAllowed => "Phone number country is not permitted.",
            ValidationCode::TooShort => {
                "Phone number is shorter than the configured minimum length."
            }
            ValidationCode::TooLong => {
                "Phone number is longer than the configured maximum length."
            }
            ValidationCode::ExtensionNotAllowed => {
                "Phone number contains an extension but extensions are disabled."
            }
            ValidationCode::UnknownRegion => "Could not determine the phone number region.",
            ValidationCode::Valid => "Phone number is valid.",
        }
    }
}

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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    enums::PhoneFormat,
    helper_constants::{DEFAULT_BLOCKLIST, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH},
};

/// Block/allow constraints that gate normalisation and validation.
///
/// Never mutated by the pipeline; callers build their own or start from
/// a clone of the default blocklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneBlockConfig {
    /// Exact numbers to block, compared with whitespace removed.
    pub exact: Vec<String>,
    /// Literal prefixes of the canonical value that mark it blocked.
    pub prefixes: Vec<String>,
    /// Region codes whose numbers are blocked.
    pub countries: Vec<String>,
    /// Regular expressions tested against the canonical value.
    pub patterns: Vec<String>,
    /// Bounds on the digit count of the canonical value.
    pub lengths: LengthBounds,
    /// Exact numbers that override every block rule.
    pub allow: AllowConfig,
}

/// Digit count bounds; `None` or zero disables a bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowConfig {
    pub exact: Vec<String>,
}

/// Countries used by the resolver when a number has no international prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvePhoneConfig {
    pub default_country: Option<String>,
    /// Tried in order after the default country.
    pub fallback_countries: Vec<String>,
}

impl ResolvePhoneConfig {
    pub fn with_default_country(country: impl Into<String>) -> Self {
        Self {
            default_country: Some(country.into()),
            fallback_countries: Vec::new(),
        }
    }
}

/// Configuration bag for standalone validation checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneValidationOptions {
    /// Rules to enforce; the default blocklist applies when `None`.
    pub blocklist: Option<PhoneBlockConfig>,
    #[serde(flatten)]
    pub resolve: ResolvePhoneConfig,
    /// When non-empty, only numbers from these regions pass.
    pub allowed_countries: Vec<String>,
    pub allow_extensions: bool,
    /// Bounds on the national significant number digit count.
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PhoneValidationOptions {
    fn default() -> Self {
        Self {
            blocklist: None,
            resolve: ResolvePhoneConfig::default(),
            allowed_countries: Vec::new(),
            allow_extensions: false,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl PhoneValidationOptions {
    /// Caller blocklist, or the default one.
    pub fn blocklist(&self) -> &PhoneBlockConfig {
        self.blocklist.as_ref().unwrap_or(&*DEFAULT_BLOCKLIST)
    }

    /// `true` when an allow-list of countries is configured and `country`
    /// is absent from it (or unknown).
    pub fn rejects_country(&self, country: Option<&str>) -> bool {
        if self.allowed_countries.is_empty() {
            return false;
        }
        match country {
            Some(country) => !self.allowed_countries.iter().any(|c| c == country),
            None => true,
        }
    }
}

/// Extends validation options with normalisation-specific toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNormOptions {
    /// When `false` the input is passed through untouched.
    pub enabled: bool,
    pub strip_extensions: bool,
    pub format: PhoneFormat,
    /// Extra literal replacements; entries win over the built-in table.
    pub symbol_map: BTreeMap<String, String>,
    #[serde(flatten)]
    pub validation: PhoneValidationOptions,
}

impl Default for PhoneNormOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            strip_extensions: true,
            format: PhoneFormat::E164,
            symbol_map: BTreeMap::new(),
            validation: PhoneValidationOptions::default(),
        }
    }
}

impl PhoneNormOptions {
    pub fn with_default_country(country: impl Into<String>) -> Self {
        let mut options = Self::default();
        options.validation.resolve.default_country = Some(country.into());
        options
    }

    pub fn with_format(mut self, format: PhoneFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_blocklist(mut self, blocklist: PhoneBlockConfig) -> Self {
        self.validation.blocklist = Some(blocklist);
        self
    }
}

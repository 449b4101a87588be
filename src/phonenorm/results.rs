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

use serde::Serialize;

use super::enums::{ChangeCode, NumberType, ValidationCode};
use crate::interfaces::ParsedNumber;

/// Renderings and details of the parsed number, filled once it is known valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneMetadata {
    pub e164: Option<String>,
    pub international: Option<String>,
    pub national: Option<String>,
    #[serde(rename = "type")]
    pub number_type: Option<NumberType>,
    pub extension: Option<String>,
}

/// Structured result returned by [`normalise_phone`](super::normalise_phone).
///
/// `changes` is always derived from `change_codes`, index for index, so
/// neither can be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNormResult {
    pub phone: Option<String>,
    pub valid: bool,
    pub country: Option<String>,
    change_codes: Vec<ChangeCode>,
    changes: Vec<&'static str>,
    pub metadata: PhoneMetadata,
}

impl PhoneNormResult {
    pub(crate) fn build(
        phone: Option<String>,
        valid: bool,
        country: Option<String>,
        change_codes: Vec<ChangeCode>,
        metadata: PhoneMetadata,
    ) -> Self {
        let changes = super::reasons::change_codes_to_reasons(&change_codes);
        Self {
            phone,
            valid,
            country,
            change_codes,
            changes,
            metadata,
        }
    }

    pub fn change_codes(&self) -> &[ChangeCode] {
        &self.change_codes
    }

    /// Human-readable reasons, aligned with [`Self::change_codes`].
    pub fn changes(&self) -> &[&'static str] {
        &self.changes
    }

    pub fn has_change(&self, code: ChangeCode) -> bool {
        self.change_codes.contains(&code)
    }
}

/// Single validation outcome emitted by [`validate_phone`](super::validate_phone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub validation_code: ValidationCode,
    pub validation_message: &'static str,
}

impl ValidationResult {
    pub(crate) fn failed(code: ValidationCode) -> Self {
        Self {
            is_valid: false,
            validation_code: code,
            validation_message: code.reason(),
        }
    }

    pub(crate) fn passed() -> Self {
        Self {
            is_valid: true,
            validation_code: ValidationCode::Valid,
            validation_message: ValidationCode::Valid.reason(),
        }
    }
}

/// Number found by the resolver and the fallback country that produced it,
/// if one was needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPhoneNumber {
    pub phone_number: ParsedNumber,
    pub used_fallback: Option<String>,
}

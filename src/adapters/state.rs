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

use crate::phonenorm::{PhoneNormOptions, PhoneNormResult, normalise_phone};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneStateOptions {
    #[serde(flatten)]
    pub norm: PhoneNormOptions,
    /// Rewrite the raw value with the normalised phone whenever it changes.
    pub auto_format: bool,
}

/// Raw phone input with views derived from its latest normalisation.
///
/// All mutation goes through `&mut self`, so the raw value and the result
/// derived from it are always updated together.
#[derive(Debug, Clone)]
pub struct PhoneState {
    value: String,
    options: PhoneStateOptions,
    result: PhoneNormResult,
    is_valid: bool,
}

impl PhoneState {
    pub fn new(initial: impl Into<String>, options: PhoneStateOptions) -> Self {
        let value = initial.into();
        let result = normalise_phone(&value, &options.norm);
        let is_valid = result.valid;
        Self {
            value,
            options,
            result,
            is_valid,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the raw value and recomputes the derived state.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.recompute();

        if self.options.auto_format {
            if let Some(phone) = self.result.phone.as_ref().filter(|p| **p != self.value) {
                self.value = phone.clone();
                self.recompute();
            }
        }
    }

    pub fn phone(&self) -> Option<&str> {
        self.result.phone.as_deref()
    }

    pub fn valid(&self) -> bool {
        self.is_valid && self.result.valid
    }

    pub fn changes(&self) -> &[&'static str] {
        self.result.changes()
    }

    pub fn result(&self) -> &PhoneNormResult {
        &self.result
    }

    pub fn options(&self) -> &PhoneStateOptions {
        &self.options
    }

    /// Writes the normalised phone back into the raw value.
    pub fn apply(&mut self) {
        if let Some(phone) = self.result.phone.clone() {
            if phone != self.value {
                self.value = phone;
                self.recompute();
            }
        }
    }

    /// Re-runs normalisation on the current value and caches its validity.
    pub fn validate(&mut self) -> bool {
        let next = normalise_phone(&self.value, &self.options.norm);
        self.is_valid = next.valid;
        self.is_valid
    }

    fn recompute(&mut self) {
        self.result = normalise_phone(&self.value, &self.options.norm);
        self.is_valid = self.result.valid;
    }
}

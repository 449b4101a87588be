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

use log::warn;

use super::{
    enums::{ChangeCode, ValidationCode},
    errors::UnknownCodeError,
};

/// Parses a change code from its wire name (`"normalised_symbols"`, ...).
pub fn change_code_from_str(code: &str) -> Result<ChangeCode, UnknownCodeError> {
    code.parse().map_err(|_| UnknownCodeError {
        kind: "change",
        code: code.to_owned(),
    })
}

/// Parses a validation code from its wire name (`"TOO_SHORT"`, ...).
pub fn validation_code_from_str(code: &str) -> Result<ValidationCode, UnknownCodeError> {
    code.parse().map_err(|_| UnknownCodeError {
        kind: "validation",
        code: code.to_owned(),
    })
}

/// Maps a validation code name to its human-readable reason.
///
/// An unrecognized name is a caller bug: it is logged and yields `None`.
pub fn validation_code_to_reason(code: &str) -> Option<&'static str> {
    match validation_code_from_str(code) {
        Ok(code) => Some(code.reason()),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

/// Maps a change code name to its human-readable reason.
pub fn change_code_to_reason(code: &str) -> Option<&'static str> {
    match change_code_from_str(code) {
        Ok(code) => Some(code.reason()),
        Err(err) => {
            warn!("{}", err);
            None
        }
    }
}

/// Reasons for `codes`, index-aligned with them.
pub fn change_codes_to_reasons(codes: &[ChangeCode]) -> Vec<&'static str> {
    codes.iter().map(|code| code.reason()).collect()
}

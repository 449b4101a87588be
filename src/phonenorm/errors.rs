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

use thiserror::Error;

pub use crate::regexp_cache::InvalidRegexError;

/// Why a single parse attempt produced no number.
///
/// Never leaves the crate as an `Err`: the parser adapter logs it and turns
/// it into `None`.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseAttemptError {
    #[error("Unknown region hint: {0}")]
    UnknownRegion(String),
    #[error("Parser rejected input: {0}")]
    Rejected(String),
    #[error("Parser panicked: {0}")]
    Panicked(String),
}

/// A string that names no known change or validation code.
#[derive(Debug, PartialEq, Eq, Error)]
#[error("Unknown phone {kind} code: {code}")]
pub struct UnknownCodeError {
    pub kind: &'static str,
    pub code: String,
}

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

use crate::phonenorm::NumberType;

/// Owned snapshot of a number returned by the parser collaborator.
///
/// Everything the pipeline reads after a structural parse lives here, so
/// the stages never touch the underlying parser types directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNumber {
    /// `+` followed by country calling code and national number, no separators.
    pub e164: String,
    pub international: String,
    pub national: String,
    pub rfc3966: String,
    /// ISO 3166-1 alpha-2 region, `None` for non-geographic calling codes.
    pub country: Option<String>,
    /// National significant number digits.
    pub national_number: String,
    /// Extension the parser found embedded in the input.
    pub extension: Option<String>,
    /// Result of the parser's own validity predicate.
    pub valid: bool,
    pub number_type: Option<NumberType>,
}

/// Internal phone number parsing API used to isolate the underlying
/// implementation of the parser and allow different implementations to be
/// swapped in easily.
pub trait ParserApi: Send + Sync {
    /// Parses `raw`, optionally hinted with an ISO region code.
    ///
    /// Returns `None` for any failure, including an unknown region hint or a
    /// fault inside the parser. Must never panic.
    fn parse(&self, raw: &str, region: Option<&str>) -> Option<ParsedNumber>;
}

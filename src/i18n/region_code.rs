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

use phonenumber::country;

pub struct RegionCode {}

impl RegionCode {
    /// Whether the parser knows `code` as an ISO 3166-1 alpha-2 region.
    pub fn is_known(code: &str) -> bool {
        Self::to_country_id(code).is_some()
    }

    /// Parser region id for an ISO code, case-insensitive.
    pub(crate) fn to_country_id(code: &str) -> Option<country::Id> {
        let code = code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        code.to_ascii_uppercase().parse::<country::Id>().ok()
    }

    /// ISO code of a parser region id. Variants are named after their codes.
    pub(crate) fn from_country_id(id: country::Id) -> String {
        format!("{:?}", id)
    }
}

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

/// String transform output along with whether the input was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFixResult {
    pub out: String,
    pub changed: bool,
}

impl PhoneFixResult {
    pub fn new(input: &str, out: String) -> Self {
        let changed = out != input;
        Self { out, changed }
    }
}

/// Residual number and the digits of a trailing extension, if one was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSplit {
    pub out: String,
    pub extension: Option<String>,
    pub changed: bool,
}

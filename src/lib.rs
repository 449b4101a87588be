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

mod interfaces;
mod lib_parser;
mod phonenorm;
mod regexp_cache;
pub mod adapters;
pub mod config;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::{ParsedNumber, ParserApi};
pub use lib_parser::LibParser;
pub use phonenorm::*;
pub use regexp_cache::{InvalidRegexError, RegexCache};

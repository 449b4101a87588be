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

use std::{borrow::Cow, collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use super::{
    helper_constants::{
        DIAL_PREFIX_PATTERN, EXTENSION_PATTERN, SYMBOL_TRANSLITERATION_MAP,
        WHITESPACE_RUN_PATTERN,
    },
    helper_types::{ExtensionSplit, PhoneFixResult},
};

static DIAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIAL_PREFIX_PATTERN).expect("dial prefix pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WHITESPACE_RUN_PATTERN).expect("whitespace pattern is valid"));
static TRAILING_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXTENSION_PATTERN).expect("extension pattern is valid"));

/// Built-in transliteration table overlaid with caller entries.
///
/// A caller entry replaces the built-in one for the same source, so every
/// source appears exactly once.
pub(super) fn merged_symbol_map(extra: &BTreeMap<String, String>) -> Vec<(&str, &str)> {
    let mut merged: Vec<(&str, &str)> = SYMBOL_TRANSLITERATION_MAP
        .iter()
        .filter(|(from, _)| !extra.contains_key(*from))
        .map(|&(from, to)| (from, to))
        .collect();
    merged.extend(extra.iter().map(|(from, to)| (from.as_str(), to.as_str())));
    merged
}

/// Replaces every literal occurrence of each map source with its target,
/// then folds any remaining Unicode decimal digits to ASCII.
pub(super) fn apply_symbol_map(value: &str, map: &[(&str, &str)]) -> PhoneFixResult {
    let mut out = Cow::Borrowed(value);
    for (from, to) in map {
        if !from.is_empty() && out.contains(from) {
            out = Cow::Owned(out.replace(from, to));
        }
    }
    let folded: String = dec_from_char::normalize_decimals(&*out).into();
    PhoneFixResult::new(value, folded)
}

/// Strips a leading `tel:`/`phone`/`call` prefix and collapses whitespace.
pub(super) fn tidy_dial_string(value: &str) -> PhoneFixResult {
    let without_prefix = DIAL_PREFIX.replace(value, "");
    let out = WHITESPACE_RUN
        .replace_all(&without_prefix, " ")
        .trim()
        .to_owned();
    PhoneFixResult::new(value, out)
}

/// Pulls a trailing extension (`ext. 12`, `x12`, `#12`, ...) off the number.
pub(super) fn strip_extension(value: &str) -> ExtensionSplit {
    let Some(captures) = TRAILING_EXTENSION.captures(value) else {
        return ExtensionSplit {
            out: value.to_owned(),
            extension: None,
            changed: false,
        };
    };
    // group 0 always exists on a match
    let start = captures.get(0).map_or(value.len(), |m| m.start());
    ExtensionSplit {
        out: value[..start].trim().to_owned(),
        extension: captures.get(1).map(|m| m.as_str().to_owned()),
        changed: true,
    }
}

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

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use log::debug;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

impl PartialEq for InvalidRegexError {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_string() == other.0.to_string()
    }
}

impl Eq for InvalidRegexError {}

/// Compiled patterns keyed by their source text.
///
/// Only successful compilations are stored, so a broken pattern is reported
/// every time it is looked up. A bounded cache is emptied whenever an insert
/// takes it past its limit.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
    max_entries: Option<usize>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
            max_entries: None,
        }
    }

    pub fn bounded(max_entries: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(max_entries.min(64)),
            max_entries: Some(max_entries),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        // the entry guard holds a shard lock and must be gone before `len`
        let regex = self
            .cache
            .entry(pattern.to_owned())
            .or_try_insert_with(|| Regex::new(pattern).map(Arc::new))?
            .value()
            .clone();

        if let Some(max) = self.max_entries.filter(|max| self.cache.len() > *max) {
            debug!("Regex cache went past {} patterns, clearing", max);
            self.cache.clear();
        }
        Ok(regex)
    }

    /// Compiles (or reuses) `pattern` and tests it against `haystack`.
    pub fn is_match(&self, pattern: &str, haystack: &str) -> Result<bool, InvalidRegexError> {
        Ok(self.get_regex(pattern)?.is_match(haystack))
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Most blocklist patterns kept compiled between calls.
pub(crate) const BLOCKLIST_PATTERN_LIMIT: usize = 256;

/// Caller supplied blocklist patterns, shared across calls.
pub(crate) static BLOCKLIST_REGEX_CACHE: LazyLock<RegexCache> =
    LazyLock::new(|| RegexCache::bounded(BLOCKLIST_PATTERN_LIMIT));

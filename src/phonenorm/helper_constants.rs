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

use std::sync::LazyLock;

use crate::phonenorm::options::{AllowConfig, LengthBounds, PhoneBlockConfig};

/// Ordered ISO codes to try when parsing numbers without a country hint.
pub const DEFAULT_REGION_FALLBACKS: [&str; 12] = [
    "GB", "IE", "US", "CA", "AU", "NZ", "DE", "FR", "SG", "IN", "ZA", "KE",
];

/// Length guard rails used when callers provide none.
pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_MAX_LENGTH: usize = 15;

// Bounds for the cheap "looks like a phone number" digit count guard.
pub const MIN_PLAUSIBLE_DIGITS: usize = 6;
pub const MAX_PLAUSIBLE_DIGITS: usize = 18;

/// Conversational prefixes like `tel:` or `call ` in front of the number.
pub const DIAL_PREFIX_PATTERN: &str = r"(?i)^(?:tel|phone|call)[:\s]+";
pub const WHITESPACE_RUN_PATTERN: &str = r"\s+";
/// Trailing extension marker followed by up to six ASCII digits.
pub const EXTENSION_PATTERN: &str = r"(?i)(?:ext\.?|extension|x|#)\s*([0-9]{1,6})$";

/// Maps common unicode digits/symbols to ASCII counterparts before parsing.
pub const SYMBOL_TRANSLITERATION_MAP: [(&str, &str); 30] = [
    ("\u{FF0B}", "+"), // FULLWIDTH PLUS SIGN
    ("\u{2212}", "-"), // MINUS SIGN
    ("\u{2013}", "-"), // EN DASH
    ("\u{2014}", "-"), // EM DASH
    ("\u{FE63}", "-"), // SMALL HYPHEN-MINUS
    ("\u{FF08}", "("),
    ("\u{FF09}", ")"),
    ("\u{3010}", "("), // LEFT BLACK LENTICULAR BRACKET
    ("\u{3011}", ")"),
    ("\u{3000}", " "), // IDEOGRAPHIC SPACE
    ("\u{FF10}", "0"),
    ("\u{FF11}", "1"),
    ("\u{FF12}", "2"),
    ("\u{FF13}", "3"),
    ("\u{FF14}", "4"),
    ("\u{FF15}", "5"),
    ("\u{FF16}", "6"),
    ("\u{FF17}", "7"),
    ("\u{FF18}", "8"),
    ("\u{FF19}", "9"),
    ("\u{0660}", "0"), // ARABIC-INDIC DIGIT ZERO
    ("\u{0661}", "1"),
    ("\u{0662}", "2"),
    ("\u{0663}", "3"),
    ("\u{0664}", "4"),
    ("\u{0665}", "5"),
    ("\u{0666}", "6"),
    ("\u{0667}", "7"),
    ("\u{0668}", "8"),
    ("\u{0669}", "9"),
];

/// Opinionated starter blocklist that callers can extend or replace.
///
/// The pattern entry does not compile and is skipped at evaluation time;
/// it is kept so a caller copying this list sees the same rule set.
pub static DEFAULT_BLOCKLIST: LazyLock<PhoneBlockConfig> = LazyLock::new(|| PhoneBlockConfig {
    exact: vec![
        "+15555555555".to_owned(),
        "+18005551234".to_owned(),
        "+447700900000".to_owned(),
    ],
    prefixes: vec!["+000".to_owned(), "+999".to_owned(), "+1234567".to_owned()],
    countries: Vec::new(),
    patterns: vec!["^(?:+?1)?1234567".to_owned()],
    lengths: LengthBounds {
        min: Some(DEFAULT_MIN_LENGTH),
        max: None,
    },
    allow: AllowConfig { exact: Vec::new() },
});

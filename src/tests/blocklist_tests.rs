use super::{init_logging, region_code::RegionCode};
use crate::{
    phonenorm::{AllowConfig, DEFAULT_BLOCKLIST, LengthBounds, PhoneBlockConfig, is_blocked_number},
    regexp_cache::{BLOCKLIST_PATTERN_LIMIT, BLOCKLIST_REGEX_CACHE},
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn honours_allow_lists_before_exact_matches() {
    init_logging();
    let config = PhoneBlockConfig {
        exact: strings(&["+18005551234"]),
        allow: AllowConfig {
            exact: strings(&["+18005551234"]),
        },
        ..Default::default()
    };
    assert!(!is_blocked_number("+18005551234", &config, Some(RegionCode::us())));
}

#[test]
fn allow_list_short_circuits_every_rule() {
    init_logging();
    let config = PhoneBlockConfig {
        prefixes: strings(&["+44"]),
        countries: strings(&["GB"]),
        patterns: strings(&["."]),
        lengths: LengthBounds {
            min: Some(20),
            max: None,
        },
        allow: AllowConfig {
            exact: strings(&["+44 7911 123456"]),
        },
        ..Default::default()
    };
    assert!(!is_blocked_number("+447911123456", &config, Some(RegionCode::gb())));
}

#[test]
fn blocks_via_exact_prefixes_countries_regex_and_lengths() {
    init_logging();
    let config = PhoneBlockConfig {
        exact: strings(&["+18005551234"]),
        prefixes: strings(&["+441"]),
        countries: strings(&["GB"]),
        patterns: strings(&["[invalid", r"^\+999"]),
        lengths: LengthBounds {
            min: Some(10),
            max: Some(12),
        },
        ..Default::default()
    };

    assert!(is_blocked_number("+18005551234", &config, Some(RegionCode::us())));
    assert!(is_blocked_number("+441234567890", &config, Some(RegionCode::gb())));
    assert!(is_blocked_number("+9991234567", &config, Some(RegionCode::us())));
    assert!(is_blocked_number("+1202555", &config, Some(RegionCode::us())));
    assert!(is_blocked_number("+1202555012345", &config, Some(RegionCode::us())));
    assert!(!is_blocked_number("+14155552671", &config, Some(RegionCode::us())));
}

#[test]
fn country_rule_needs_a_resolved_country() {
    init_logging();
    let config = PhoneBlockConfig {
        countries: strings(&["GB"]),
        ..Default::default()
    };
    assert!(is_blocked_number("+447911123456", &config, Some(RegionCode::gb())));
    assert!(!is_blocked_number("+447911123456", &config, None));
    assert!(!is_blocked_number("+447911123456", &config, Some(RegionCode::ie())));
}

#[test]
fn exact_entries_compare_without_whitespace() {
    init_logging();
    let config = PhoneBlockConfig {
        exact: strings(&["+1 415 555 2671"]),
        ..Default::default()
    };
    assert!(is_blocked_number("+1415 5552671", &config, None));
}

#[test]
fn empty_values_are_never_blocked() {
    init_logging();
    let config = PhoneBlockConfig {
        prefixes: strings(&[""]),
        lengths: LengthBounds {
            min: Some(8),
            max: None,
        },
        ..Default::default()
    };
    assert!(!is_blocked_number("", &config, None));
    assert!(!is_blocked_number("  \t", &config, None));
}

#[test]
fn zero_length_bounds_are_ignored() {
    init_logging();
    let config = PhoneBlockConfig {
        lengths: LengthBounds {
            min: Some(0),
            max: Some(0),
        },
        ..Default::default()
    };
    assert!(!is_blocked_number("+1", &config, None));
}

#[test]
fn default_blocklist() {
    init_logging();
    let config = &*DEFAULT_BLOCKLIST;
    assert!(is_blocked_number("+447700900000", config, Some(RegionCode::gb())));
    assert!(is_blocked_number("+9991234567", config, None));
    assert!(is_blocked_number("+12345678901", config, Some(RegionCode::us())));
    // full E.164 digit count, country code included
    assert!(is_blocked_number("+1234", config, None));
    assert!(!is_blocked_number("+14155552671", config, Some(RegionCode::us())));
}

#[test]
fn distinct_caller_patterns_do_not_pile_up() {
    init_logging();
    for i in 0..BLOCKLIST_PATTERN_LIMIT * 4 {
        let config = PhoneBlockConfig {
            patterns: vec![format!(r"^\+999{}", i)],
            ..Default::default()
        };
        assert!(!is_blocked_number("+14155552671", &config, None));
    }
    assert!(BLOCKLIST_REGEX_CACHE.len() <= BLOCKLIST_PATTERN_LIMIT);

    let config = PhoneBlockConfig {
        patterns: strings(&[r"^\+1415"]),
        ..Default::default()
    };
    assert!(is_blocked_number("+1 415 555 2671", &config, None));
}

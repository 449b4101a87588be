use super::{
    fake_parser::{FakeParser, parsed},
    init_logging,
    region_code::RegionCode,
};
use crate::phonenorm::{
    PhoneBlockConfig, PhoneNormaliser, PhoneValidationOptions, ResolvePhoneConfig,
    ValidationCode, is_empty, looks_like_phone, validate_phone,
};

fn codes(raw: &str, options: &PhoneValidationOptions) -> Vec<ValidationCode> {
    validate_phone(raw, options)
        .iter()
        .map(|r| r.validation_code)
        .collect()
}

#[test]
fn flags_empty_input() {
    init_logging();
    let results = validate_phone("", &PhoneValidationOptions::default());

    assert_eq!(
        results.iter().map(|r| r.validation_code).collect::<Vec<_>>(),
        vec![ValidationCode::Empty, ValidationCode::InvalidFormat]
    );
    assert!(results.iter().all(|r| !r.is_valid));
    assert_eq!(results[0].validation_message, "Phone number is empty.");
}

#[test]
fn returns_valid_when_no_rule_fires() {
    init_logging();
    let results = validate_phone("+14155552671", &PhoneValidationOptions::default());

    assert_eq!(results.len(), 1);
    assert!(results[0].is_valid);
    assert_eq!(results[0].validation_code, ValidationCode::Valid);
    assert_eq!(results[0].validation_message, "Phone number is valid.");
}

#[test]
fn short_circuits_when_the_value_does_not_look_like_a_phone() {
    init_logging();
    assert_eq!(
        codes("abc", &PhoneValidationOptions::default()),
        vec![ValidationCode::InvalidFormat]
    );
}

#[test]
fn flags_unknown_regions() {
    init_logging();
    let found = codes("+870773111632", &PhoneValidationOptions::default());
    assert!(found.contains(&ValidationCode::UnknownRegion));
}

#[test]
fn applies_allowed_country_filters() {
    init_logging();
    let options = PhoneValidationOptions {
        allowed_countries: vec![RegionCode::us().to_owned()],
        ..Default::default()
    };
    assert!(codes("+61491570156", &options).contains(&ValidationCode::CountryNotAllowed));
}

#[test]
fn respects_blocklists() {
    init_logging();
    let options = PhoneValidationOptions {
        blocklist: Some(PhoneBlockConfig {
            exact: vec!["+18005551234".to_owned()],
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(codes("+18005551234", &options).contains(&ValidationCode::Blocklisted));
}

#[test]
fn flags_extensions_when_not_allowed() {
    init_logging();
    let options = PhoneValidationOptions {
        resolve: ResolvePhoneConfig::with_default_country(RegionCode::us()),
        allow_extensions: false,
        ..Default::default()
    };
    assert!(
        codes("+1 415 555 2671 ext 88", &options).contains(&ValidationCode::ExtensionNotAllowed)
    );

    let allowed = PhoneValidationOptions {
        allow_extensions: true,
        ..options
    };
    assert!(
        !codes("+1 415 555 2671 ext 88", &allowed).contains(&ValidationCode::ExtensionNotAllowed)
    );
}

#[test]
fn accumulates_every_failing_rule() {
    init_logging();
    let mut number = parsed("+4412345", "12345", None, false);
    number.extension = Some("5".to_owned());
    let parser = FakeParser::new().with("+44 12345 x5", None, number);
    let normaliser = PhoneNormaliser::with_parser(Box::new(parser));
    let options = PhoneValidationOptions {
        allowed_countries: vec![RegionCode::gb().to_owned()],
        blocklist: Some(PhoneBlockConfig {
            prefixes: vec!["+44".to_owned()],
            ..Default::default()
        }),
        ..Default::default()
    };
    let found: Vec<_> = normaliser
        .validate("+44 12345 x5", &options)
        .into_iter()
        .map(|r| r.validation_code)
        .collect();

    assert_eq!(
        found,
        vec![
            ValidationCode::InvalidFormat,
            ValidationCode::TooShort,
            ValidationCode::CountryNotAllowed,
            ValidationCode::UnknownRegion,
            ValidationCode::Blocklisted,
            ValidationCode::ExtensionNotAllowed,
        ]
    );
}

#[test]
fn length_bounds_use_national_digits() {
    init_logging();
    let parser = FakeParser::new()
        .with("555123", Some(RegionCode::us()), parsed("+1555123", "555123", Some(RegionCode::us()), true))
        .with(
            "+49 1234567890123456",
            None,
            parsed("+491234567890123456", "1234567890123456", Some(RegionCode::de()), true),
        );
    let normaliser = PhoneNormaliser::with_parser(Box::new(parser));
    let options = PhoneValidationOptions {
        resolve: ResolvePhoneConfig::with_default_country(RegionCode::us()),
        min_length: 10,
        blocklist: Some(PhoneBlockConfig::default()),
        ..Default::default()
    };

    let short = normaliser.validate("555123", &options);
    assert_eq!(short[0].validation_code, ValidationCode::TooShort);
    assert_eq!(short.len(), 1);

    let long = normaliser.validate("+49 1234567890123456", &options);
    assert_eq!(long[0].validation_code, ValidationCode::TooLong);
    assert_eq!(long.len(), 1);
}

#[test]
fn unresolvable_input_stops_after_invalid_format() {
    init_logging();
    let normaliser = PhoneNormaliser::with_parser(Box::new(FakeParser::new()));
    let results = normaliser.validate("123-456-789", &PhoneValidationOptions::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].validation_code, ValidationCode::InvalidFormat);
}

#[test]
fn never_returns_an_empty_list() {
    init_logging();
    for raw in ["", " ", "abc", "12345", "+14155552671", "+999 999 999 999", "0"] {
        assert!(!validate_phone(raw, &PhoneValidationOptions::default()).is_empty());
    }
}

#[test]
fn detects_empty_and_non_phone_inputs() {
    assert!(is_empty("   "));
    assert!(is_empty(""));
    assert!(!is_empty("123"));
    assert!(!looks_like_phone("12345"));
    assert!(looks_like_phone("+14155552671"));
    assert!(looks_like_phone("123456"));
    assert!(looks_like_phone("1".repeat(18).as_str()));
    assert!(!looks_like_phone("1".repeat(19).as_str()));
}

use std::{env, fs};

use crate::{
    config::{ConfigError, PhoneConfig},
    phonenorm::{DEFAULT_MAX_LENGTH, PhoneFormat, normalise_phone},
};

const SAMPLE: &str = r#"
[normalise]
default_country = "GB"
fallback_countries = ["IE"]
format = "INTERNATIONAL"
strip_extensions = false

[normalise.symbol_map]
"•" = ""

[normalise.blocklist]
prefixes = ["+44070"]

[normalise.blocklist.lengths]
min = 9

[validate]
allowed_countries = ["GB", "IE"]
allow_extensions = true
min_length = 9
"#;

#[test]
fn parses_both_sections() {
    let config = PhoneConfig::from_toml_str(SAMPLE).unwrap();

    let norm = &config.normalise;
    assert!(norm.enabled);
    assert!(!norm.strip_extensions);
    assert_eq!(norm.format, PhoneFormat::International);
    assert_eq!(norm.validation.resolve.default_country.as_deref(), Some("GB"));
    assert_eq!(norm.validation.resolve.fallback_countries, vec!["IE"]);
    assert_eq!(norm.symbol_map.get("•").map(String::as_str), Some(""));
    let blocklist = norm.validation.blocklist.as_ref().unwrap();
    assert_eq!(blocklist.prefixes, vec!["+44070"]);
    assert_eq!(blocklist.lengths.min, Some(9));
    assert!(blocklist.exact.is_empty());

    let validate = &config.validate;
    assert_eq!(validate.allowed_countries, vec!["GB", "IE"]);
    assert!(validate.allow_extensions);
    assert_eq!(validate.min_length, 9);
    assert_eq!(validate.max_length, DEFAULT_MAX_LENGTH);
    assert!(validate.blocklist.is_none());
}

#[test]
fn loaded_options_drive_the_pipeline() {
    let config = PhoneConfig::from_toml_str(SAMPLE).unwrap();
    let result = normalise_phone("07911•123456", &config.normalise);

    assert_eq!(result.phone.as_deref(), Some("+44 7911 123456"));
}

#[test]
fn empty_config_uses_defaults() {
    let config = PhoneConfig::from_toml_str("").unwrap();
    assert_eq!(config, PhoneConfig::default());
    assert!(config.normalise.enabled);
    assert_eq!(config.normalise.format, PhoneFormat::E164);
}

#[test]
fn rejects_unknown_regions_and_inverted_bounds() {
    let err = PhoneConfig::from_toml_str("[validate]\nallowed_countries = [\"QQ\"]\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnknownRegion { field: "allowed_countries", ref code } if code == "QQ"
    ));

    let err = PhoneConfig::from_toml_str("[validate]\nmin_length = 20\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLengths { min: 20, max: 15 }));

    let err = PhoneConfig::from_toml_str("[normalise]\nformat = \"LOUD\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidToml(_)));
}

#[test]
fn loads_from_disk() {
    let path = env::temp_dir().join(format!("rphonenorm-config-{}.toml", std::process::id()));
    fs::write(&path, SAMPLE).unwrap();
    let config = PhoneConfig::load_from_path(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(config.normalise.format, PhoneFormat::International);

    let err = PhoneConfig::load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn file_errors_carry_the_path() {
    let path = env::temp_dir().join(format!("rphonenorm-broken-{}.toml", std::process::id()));
    fs::write(&path, "[normalise]\nformat = \"LOUD\"\n").unwrap();
    let err = PhoneConfig::load_from_path(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

//! Configuration loading tests

use proxima_ann::{AnnConfig, ConfigError, SkipList1D};
use std::io::Write;

#[test]
fn test_full_toml_round_trips_into_skip_list() {
    let raw = r#"
        [skip_list]
        max_level = 4
        level_increase_probability = 0.25
        seed = 42

        [logging]
        level = "debug"
    "#;

    let config = AnnConfig::from_toml_str(raw).unwrap();
    assert_eq!(config.skip_list.max_level, 4);
    assert_eq!(config.skip_list.level_increase_probability, 0.25);
    assert_eq!(config.skip_list.seed, Some(42));
    assert_eq!(config.logging.level, "debug");

    let list = SkipList1D::new(config.skip_list).unwrap();
    assert_eq!(list.max_level(), 4);
}

#[test]
fn test_empty_toml_uses_defaults() {
    assert_eq!(AnnConfig::from_toml_str("").unwrap(), AnnConfig::default());
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let err = AnnConfig::from_toml_str("[skip_list]\nmax_level = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = AnnConfig::from_toml_str("[skip_list]\nlevel_increase_probability = 2.0\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_malformed_toml() {
    let err = AnnConfig::from_toml_str("[skip_list\nmax_level = ").unwrap_err();
    assert!(matches!(err, ConfigError::TomlParseError(_)));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[skip_list]\nmax_level = 3").unwrap();

    let config = AnnConfig::from_file(file.path()).unwrap();
    assert_eq!(config.skip_list.max_level, 3);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AnnConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

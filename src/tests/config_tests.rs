//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    dictionary::DictionaryConfig, search::SearchConfig, ConfigLoader, LexitrieConfig, LogConfig,
    Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use crate::trie::SearchMode;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LexitrieConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search.mode, SearchMode::Strict);
    assert_eq!(config.search.limit, None);
    assert!(config.dictionary.files.is_empty());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LexitrieConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.search.limit = Some(0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));

    config.search.limit = Some(10);
    config.dictionary.files.push(PathBuf::new());
    assert!(config.validate().is_err());

    config.dictionary.files.clear();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "lexitrie.toml",
            r#"
            [dictionary]
            files = ["words.txt"]
            lowercase = true

            [search]
            mode = "lenient"
            limit = 5
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.files, vec![PathBuf::from("words.txt")]);
    assert!(config.dictionary.lowercase);
    assert_eq!(config.search.mode, SearchMode::Lenient);
    assert_eq!(config.search.limit, Some(5));

    // Other values should be defaults
    assert_eq!(config.log.level, LogConfig::default().level);
    assert!(!config.log.json);
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("lexitrie.json", r#"{ "log": { "level": "trace", "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.log.level, "trace");
    assert!(config.log.json);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("env.toml", "[search]\nmode = \"strict\"\n")
        .unwrap();

    std::env::set_var("TEST_ENV__SEARCH__MODE", "lenient");
    let result = ConfigLoader::new(Some(&config_path), "TEST_ENV").load();
    std::env::remove_var("TEST_ENV__SEARCH__MODE");

    assert_eq!(result.unwrap().search.mode, SearchMode::Lenient);
}

/// Test that missing, malformed and invalid files are rejected.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();

    let missing = fixture.temp_dir.path().join("missing.toml");
    assert!(matches!(
        ConfigLoader::new(Some(&missing), "TEST_INVALID").load(),
        Err(ConfigError::FileNotFound(_))
    ));

    let malformed = fixture.create_file("bad.toml", "[search\nmode = strict\"").unwrap();
    assert!(ConfigLoader::new(Some(&malformed), "TEST_INVALID").load().is_err());

    let unsupported = fixture.create_file("config.ini.txt", "").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_INVALID").load(),
        Err(ConfigError::ParseError(_))
    ));

    let invalid = fixture
        .create_file("invalid.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&invalid), "TEST_INVALID").load(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// Test loading without any file falls back to defaults.
#[test]
fn test_load_without_file() {
    let config = ConfigLoader::new(None::<PathBuf>, "TEST_NO_FILE").load().unwrap();
    assert_eq!(config.search.mode, SearchMode::Strict);
}

/// Test that the default configuration survives a TOML round trip.
#[test]
fn test_default_config_serializes() {
    let toml = toml::to_string_pretty(&LexitrieConfig::default()).unwrap();
    assert!(toml.contains("mode = \"strict\""));

    let parsed: LexitrieConfig = toml::from_str(&toml).unwrap();
    assert!(parsed.validate().is_ok());
}

/// Test search limits and dictionary normalization.
#[test]
fn test_section_helpers() {
    let search = SearchConfig {
        limit: Some(2),
        ..Default::default()
    };
    let limited = search.apply_limit(vec!["a".into(), "b".into(), "c".into()]);
    assert_eq!(limited, vec!["a", "b"]);

    let dictionary = DictionaryConfig::default();
    assert_eq!(dictionary.normalize("Word\r"), Some("Word".to_string()));
    assert_eq!(dictionary.normalize("  "), None);
    assert_eq!(dictionary.normalize(" padded "), Some(" padded ".to_string()));
    assert_eq!(dictionary.normalize_query("Apple"), "Apple");
}

/// Test that lookups fold case the same way lowercased word lists do.
#[test]
fn test_lowercase_dictionary_matches_mixed_case_queries() {
    let fixture = TestFixture::new().unwrap();
    let words = fixture.create_file("words.txt", "Apple
Apricot
Éclair
").unwrap();
    let dictionary = DictionaryConfig {
        files: vec![words],
        lowercase: true,
    };
    let trie = crate::dictionary::build::<PathBuf>(&dictionary, &[]).unwrap();

    assert!(!trie.contains("Apple"));
    assert!(trie.contains(&dictionary.normalize_query("Apple")));
    assert!(trie.contains(&dictionary.normalize_query("ÉCLAIR")));
    assert_eq!(
        trie.search(&dictionary.normalize_query("AP")),
        vec!["apple", "apricot"]
    );
    assert_eq!(dictionary.normalize_query("  "), "  ");
}

/*!
 * Tests for the application configuration
 */

use std::fs::File;
use std::io::BufReader;

use dengon::app_config::{Config, LogLevel};

use crate::common::{create_config_file, create_temp_dir};

#[test]
fn test_defaultConfig_shouldUseArgosEndpointAndJapaneseAnchor() {
    let config = Config::default();

    assert_eq!(config.endpoint, "https://translate.argosopentech.com/translate");
    assert_eq!(config.anchor_language, "ja");
    assert_eq!(config.timeout_secs, 30);
    assert!(config.api_key.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_defaultConfig_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_withPartialJson_shouldFillDefaults() {
    let dir = create_temp_dir().unwrap();
    let path = create_config_file(&dir, r#"{ "endpoint": "http://localhost:5000/translate" }"#)
        .unwrap();

    let file = File::open(path).unwrap();
    let config: Config = serde_json::from_reader(BufReader::new(file)).unwrap();

    assert_eq!(config.endpoint, "http://localhost:5000/translate");
    assert_eq!(config.anchor_language, "ja");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_config_roundTrip_shouldPreserveFields() {
    let mut config = Config::default();
    config.api_key = "secret".to_string();
    config.anchor_language = "en".to_string();
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.api_key, "secret");
    assert_eq!(parsed.anchor_language, "en");
    assert_eq!(parsed.log_level, LogLevel::Debug);
}

#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    config.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    config.endpoint = "ftp://example.com/translate".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyAnchor_shouldFail() {
    let mut config = Config::default();
    config.anchor_language = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroTimeout_shouldFail() {
    let mut config = Config::default();
    config.timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_logLevel_shouldDeserializeLowercase() {
    let config: Config = serde_json::from_str(r#"{ "log_level": "trace" }"#).unwrap();
    assert_eq!(config.log_level, LogLevel::Trace);
}

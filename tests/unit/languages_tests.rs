/*!
 * Tests for the supported-language table
 */

use dengon::languages::{display_name, english_name, is_supported, SUPPORTED_LANGUAGES};

#[test]
fn test_supportedLanguages_shouldContainSixteenEntries() {
    assert_eq!(SUPPORTED_LANGUAGES.len(), 16);
}

#[test]
fn test_supportedLanguages_shouldIncludeAnchorLanguage() {
    assert!(is_supported("ja"));
    assert_eq!(display_name("ja"), Some("日本語"));
}

#[test]
fn test_displayName_shouldMatchMenuEntries() {
    assert_eq!(display_name("ug"), Some("ウイグル語"));
    assert_eq!(display_name("la"), Some("ラテン語"));
    assert_eq!(display_name("ky"), Some("キルギス語"));
    assert_eq!(display_name("xh"), Some("コーサ語"));
}

#[test]
fn test_englishName_shouldResolveViaIso639() {
    assert_eq!(english_name("de"), Some("German"));
    assert_eq!(english_name("ja"), Some("Japanese"));
    assert_eq!(english_name("zz"), None);
}

#[test]
fn test_isSupported_withUnknownCode_shouldBeFalse() {
    assert!(!is_supported("eo"));
    assert!(!is_supported(""));
}

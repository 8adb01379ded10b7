/*!
 * Supported-language table for the chain UI surfaces.
 *
 * The chain runner treats language codes as opaque tokens; this table only
 * exists for presentation (picking languages, printing readable names). The
 * Japanese display names mirror what the public LibreTranslate instances
 * offer. A live instance can report more languages than this table; see
 * `LibreTranslate::languages` for the remote list.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One supported language with its Japanese display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// ISO 639-1 language code
    pub code: &'static str,
    /// Japanese display name
    pub name: &'static str,
}

/// Languages offered for chain building, in menu order
pub static SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "en", name: "英語" },
    LanguageEntry { code: "es", name: "スペイン語" },
    LanguageEntry { code: "fr", name: "フランス語" },
    LanguageEntry { code: "de", name: "ドイツ語" },
    LanguageEntry { code: "it", name: "イタリア語" },
    LanguageEntry { code: "pt", name: "ポルトガル語" },
    LanguageEntry { code: "ru", name: "ロシア語" },
    LanguageEntry { code: "ja", name: "日本語" },
    LanguageEntry { code: "ko", name: "韓国語" },
    LanguageEntry { code: "zh", name: "中国語" },
    LanguageEntry { code: "ar", name: "アラビア語" },
    LanguageEntry { code: "hi", name: "ヒンディー語" },
    LanguageEntry { code: "ug", name: "ウイグル語" },
    LanguageEntry { code: "la", name: "ラテン語" },
    LanguageEntry { code: "ky", name: "キルギス語" },
    LanguageEntry { code: "xh", name: "コーサ語" },
];

static BY_CODE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|entry| (entry.code, entry.name))
        .collect()
});

/// Look up the Japanese display name for a language code
pub fn display_name(code: &str) -> Option<&'static str> {
    BY_CODE.get(code.trim().to_lowercase().as_str()).copied()
}

/// Look up the English name for a language code via ISO 639-1
pub fn english_name(code: &str) -> Option<&'static str> {
    isolang::Language::from_639_1(code.trim().to_lowercase().as_str())
        .map(|lang| lang.to_name())
}

/// Whether a language code appears in the supported table
pub fn is_supported(code: &str) -> bool {
    display_name(code).is_some()
}

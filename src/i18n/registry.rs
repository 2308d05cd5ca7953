//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a fixed, closed set of 21 languages. It uses a singleton
//! pattern with `OnceLock` so every component consults the same immutable
//! table, initialized once on first access.

use crate::i18n::strings::{self, LanguageStrings};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Spanish", "French")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Español", "Français")
    pub native_name: &'static str,

    /// Localized strings used when producing output in this language
    pub strings: LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Matching is exact: callers are expected to lower-case user input first.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "es")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a language code is part of the registry.
    ///
    /// # Arguments
    /// * `code` - The lower-cased language code to check
    ///
    /// # Returns
    /// `true` if the code is one of the 21 supported languages, `false` otherwise.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// English display name for a code, if the code is known.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.get_by_code(code).map(|lang| lang.name)
    }

    /// Get all languages in registry order.
    ///
    /// # Returns
    /// A vector of references to all language configurations.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Number of supported languages.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

fn language(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    strings: LanguageStrings,
) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        strings,
    }
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        language("en", "English", "English", strings::ENGLISH),
        language("es", "Spanish", "Español", strings::SPANISH),
        language("fr", "French", "Français", strings::FRENCH),
        language("de", "German", "Deutsch", strings::GERMAN),
        language("it", "Italian", "Italiano", strings::ITALIAN),
        language("pt", "Portuguese", "Português", strings::PORTUGUESE),
        language("ru", "Russian", "Русский", strings::RUSSIAN),
        language("ja", "Japanese", "日本語", strings::JAPANESE),
        language("ko", "Korean", "한국어", strings::KOREAN),
        language("zh", "Chinese", "中文", strings::CHINESE),
        language("ar", "Arabic", "العربية", strings::ARABIC),
        language("hi", "Hindi", "हिन्दी", strings::HINDI),
        language("nl", "Dutch", "Nederlands", strings::DUTCH),
        language("sv", "Swedish", "Svenska", strings::SWEDISH),
        language("da", "Danish", "Dansk", strings::DANISH),
        language("no", "Norwegian", "Norsk", strings::NORWEGIAN),
        language("fi", "Finnish", "Suomi", strings::FINNISH),
        language("pl", "Polish", "Polski", strings::POLISH),
        language("tr", "Turkish", "Türkçe", strings::TURKISH),
        language("th", "Thai", "ไทย", strings::THAI),
        language("vi", "Vietnamese", "Tiếng Việt", strings::VIETNAMESE),
    ]
}

//! Localized strings for each supported language.

/// Localized strings attached to a language in the registry.
#[derive(Debug, Clone, Copy)]
pub struct LanguageStrings {
    /// Prefix the dictionary engine puts in front of text it has no phrase for,
    /// when this language is the target.
    ///
    /// Empty string means there is no localized prefix and the generic
    /// `[Translated to <code>]` form is used instead.
    pub translated_prefix: &'static str,
}

impl LanguageStrings {
    const fn new(translated_prefix: &'static str) -> Self {
        Self { translated_prefix }
    }
}

pub const ENGLISH: LanguageStrings = LanguageStrings::new("");
pub const SPANISH: LanguageStrings = LanguageStrings::new("[Traducido al español]");
pub const FRENCH: LanguageStrings = LanguageStrings::new("[Traduit en français]");
pub const GERMAN: LanguageStrings = LanguageStrings::new("[Ins Deutsche übersetzt]");
pub const ITALIAN: LanguageStrings = LanguageStrings::new("[Tradotto in italiano]");
pub const PORTUGUESE: LanguageStrings = LanguageStrings::new("[Traduzido para português]");
pub const RUSSIAN: LanguageStrings = LanguageStrings::new("[Переведено на русский]");
pub const JAPANESE: LanguageStrings = LanguageStrings::new("[日本語に翻訳]");
pub const KOREAN: LanguageStrings = LanguageStrings::new("[한국어로 번역]");
pub const CHINESE: LanguageStrings = LanguageStrings::new("[翻译成中文]");
pub const ARABIC: LanguageStrings = LanguageStrings::new("[مترجم إلى العربية]");
pub const HINDI: LanguageStrings = LanguageStrings::new("[हिंदी में अनुवादित]");
pub const DUTCH: LanguageStrings = LanguageStrings::new("[Vertaald naar het Nederlands]");
pub const SWEDISH: LanguageStrings = LanguageStrings::new("[Översatt till svenska]");
pub const DANISH: LanguageStrings = LanguageStrings::new("[Oversat til dansk]");
pub const NORWEGIAN: LanguageStrings = LanguageStrings::new("[Oversatt til norsk]");
pub const FINNISH: LanguageStrings = LanguageStrings::new("[Käännetty suomeksi]");
pub const POLISH: LanguageStrings = LanguageStrings::new("[Przetłumaczone na polski]");
pub const TURKISH: LanguageStrings = LanguageStrings::new("[Türkçeye çevrildi]");
pub const THAI: LanguageStrings = LanguageStrings::new("[แปลเป็นภาษาไทย]");
pub const VIETNAMESE: LanguageStrings = LanguageStrings::new("[Được dịch sang tiếng Việt]");

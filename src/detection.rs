//! Heuristic language detection from unicode code-point ranges.
//!
//! This is deliberately coarse: the first script found in a fixed priority
//! order wins, and anything without a recognized script is English.

use crate::i18n::Language;
use std::ops::RangeInclusive;

/// Which checks run after the non-Latin script checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionPolicy {
    /// Only non-Latin scripts are recognized.
    ScriptOnly,
    /// Accented Latin letters additionally map to Spanish, French and German.
    LatinAccents,
}

impl DetectionPolicy {
    pub fn from_flag(latin_accents: bool) -> Self {
        if latin_accents {
            Self::LatinAccents
        } else {
            Self::ScriptOnly
        }
    }
}

const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4E00}'..='\u{9FFF}';
const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';
const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';
const HANGUL: RangeInclusive<char> = '\u{AC00}'..='\u{D7AF}';
const ARABIC: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';
const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';
const CYRILLIC: RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

const SPANISH_LETTERS: &str = "ñáéíóúü";
const FRENCH_LETTERS: &str = "àâäéèêëïîôöùûüÿç";
const GERMAN_LETTERS: &str = "äöüß";

/// Script checks in priority order.
const SCRIPTS: &[(&[RangeInclusive<char>], Language)] = &[
    (&[CJK_IDEOGRAPHS], Language::CHINESE),
    (&[HIRAGANA, KATAKANA], Language::JAPANESE),
    (&[HANGUL], Language::KOREAN),
    (&[ARABIC], Language::ARABIC),
    (&[DEVANAGARI], Language::HINDI),
    (&[CYRILLIC], Language::RUSSIAN),
];

/// Accent checks in priority order, run on lower-cased text.
const ACCENTS: &[(&str, Language)] = &[
    (SPANISH_LETTERS, Language::SPANISH),
    (FRENCH_LETTERS, Language::FRENCH),
    (GERMAN_LETTERS, Language::GERMAN),
];

/// Guess the language of `text`.
///
/// Note that because the Chinese check runs first, Japanese text containing
/// kanji is reported as Chinese.
pub fn detect(text: &str, policy: DetectionPolicy) -> Language {
    for (ranges, language) in SCRIPTS {
        if text
            .chars()
            .any(|c| ranges.iter().any(|range| range.contains(&c)))
        {
            return *language;
        }
    }

    if policy == DetectionPolicy::LatinAccents {
        for (letters, language) in ACCENTS {
            if text
                .chars()
                .flat_map(char::to_lowercase)
                .any(|c| letters.contains(c))
            {
                return *language;
            }
        }
    }

    Language::ENGLISH
}

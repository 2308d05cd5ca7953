//! Fixed table of MarianMT models by ordered language pair.

use super::LanguagePair;

/// A pretrained MarianMT checkpoint serving one translation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarianRoute {
    pub source: &'static str,
    pub target: &'static str,
    pub model_id: &'static str,
}

const fn route(source: &'static str, target: &'static str, model_id: &'static str) -> MarianRoute {
    MarianRoute {
        source,
        target,
        model_id,
    }
}

/// Every direction the neural engine can serve. Anything else is unsupported.
pub static MARIAN_ROUTES: &[MarianRoute] = &[
    route("en", "es", "Helsinki-NLP/opus-mt-en-es"),
    route("es", "en", "Helsinki-NLP/opus-mt-es-en"),
    route("en", "fr", "Helsinki-NLP/opus-mt-en-fr"),
    route("fr", "en", "Helsinki-NLP/opus-mt-fr-en"),
    route("en", "de", "Helsinki-NLP/opus-mt-en-de"),
    route("de", "en", "Helsinki-NLP/opus-mt-de-en"),
    route("en", "it", "Helsinki-NLP/opus-mt-en-it"),
    route("it", "en", "Helsinki-NLP/opus-mt-it-en"),
    route("en", "pt", "Helsinki-NLP/opus-mt-en-pt"),
    route("pt", "en", "Helsinki-NLP/opus-mt-pt-en"),
    route("en", "ru", "Helsinki-NLP/opus-mt-en-ru"),
    route("ru", "en", "Helsinki-NLP/opus-mt-ru-en"),
    // The Japanese checkpoints use the "jap" suffix
    route("en", "ja", "Helsinki-NLP/opus-mt-en-jap"),
    route("ja", "en", "Helsinki-NLP/opus-mt-jap-en"),
    route("en", "ko", "Helsinki-NLP/opus-mt-en-ko"),
    route("ko", "en", "Helsinki-NLP/opus-mt-ko-en"),
    route("en", "zh", "Helsinki-NLP/opus-mt-en-zh"),
    route("zh", "en", "Helsinki-NLP/opus-mt-zh-en"),
    route("en", "ar", "Helsinki-NLP/opus-mt-en-ar"),
    route("ar", "en", "Helsinki-NLP/opus-mt-ar-en"),
    route("en", "hi", "Helsinki-NLP/opus-mt-en-hi"),
    route("hi", "en", "Helsinki-NLP/opus-mt-hi-en"),
];

/// Look up the model for an ordered pair.
pub fn model_id_for(pair: LanguagePair) -> Option<&'static str> {
    MARIAN_ROUTES
        .iter()
        .find(|r| r.source == pair.source.code() && r.target == pair.target.code())
        .map(|r| r.model_id)
}

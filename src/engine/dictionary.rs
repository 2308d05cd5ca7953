//! Demo backend: static phrase tables plus localized placeholder output.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::phrasebook::{phrasebook_for, PhraseBook};
use super::{EngineHandle, EngineKind, LanguagePair, ModelCache, TranslationEngine};
use crate::error::TranslateError;
use crate::i18n::Language;

/// Handle for one pair in the dictionary backend.
///
/// `book` is `None` for pairs that have no phrase table; every input then
/// takes the placeholder path.
#[derive(Debug)]
pub struct PhraseTable {
    pair: LanguagePair,
    book: Option<&'static PhraseBook>,
}

impl PhraseTable {
    pub fn for_pair(pair: LanguagePair) -> Self {
        Self {
            pair,
            book: phrasebook_for(pair),
        }
    }

    /// Phrase hit if the whole input matches, otherwise the placeholder.
    pub fn render(&self, text: &str) -> String {
        match self.book.and_then(|book| book.lookup(text)) {
            Some(translation) => translation.to_string(),
            None => placeholder(self.pair.target, text),
        }
    }
}

#[async_trait]
impl EngineHandle for PhraseTable {
    fn describe(&self) -> String {
        match self.book {
            Some(book) => format!("phrasebook {} ({} phrases)", self.pair, book.phrases.len()),
            None => format!("placeholder {}", self.pair),
        }
    }

    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        Ok(self.render(text))
    }
}

/// `[<localized prefix>] <text>`, or `[Translated to <code>] <text>` when the
/// target has no localized prefix.
pub fn placeholder(target: Language, text: &str) -> String {
    let prefix = target.config().strings.translated_prefix;
    if prefix.is_empty() {
        format!("[Translated to {}] {}", target.code(), text)
    } else {
        format!("{} {}", prefix, text)
    }
}

pub struct DictionaryEngine {
    cache: ModelCache<PhraseTable>,
}

impl DictionaryEngine {
    pub fn new(cache: ModelCache<PhraseTable>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &ModelCache<PhraseTable> {
        &self.cache
    }
}

#[async_trait]
impl TranslationEngine for DictionaryEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Dictionary
    }

    /// Never fails: pairs without a phrase table fall back to placeholders.
    async fn resolve(&self, pair: LanguagePair) -> Result<Arc<dyn EngineHandle>, TranslateError> {
        let table = self
            .cache
            .get_or_load(pair, || async move {
                let table = PhraseTable::for_pair(pair);
                debug!("Loaded {}", table.describe());
                Ok(Arc::new(table))
            })
            .await?;

        Ok(table as Arc<dyn EngineHandle>)
    }
}

//! Translation engines.
//!
//! The HTTP layer talks to a single [`TranslationEngine`] trait object. Two
//! implementations exist:
//!
//! - [`NeuralEngine`]: MarianMT models behind a Hugging Face-compatible
//!   inference endpoint, one model per ordered language pair
//! - [`DictionaryEngine`]: the demo backend, a static phrase table with a
//!   localized placeholder for everything else
//!
//! Both resolve a language pair to an [`EngineHandle`] through a
//! [`ModelCache`], then run the handle on the input text.

pub mod cache;
pub mod dictionary;
pub mod neural;
pub mod phrasebook;
pub mod routes;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::detection::DetectionPolicy;
use crate::error::TranslateError;
use crate::i18n::Language;

pub use cache::ModelCache;
pub use dictionary::DictionaryEngine;
pub use neural::{NeuralEngine, NeuralSettings};

/// An ordered (source, target) pair. `(en, es)` and `(es, en)` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.source, self.target)
    }
}

/// Which backend serves translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Neural,
    Dictionary,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neural => "neural",
            Self::Dictionary => "dictionary",
        }
    }

    /// Service name reported by the health endpoint.
    pub fn service_name(&self) -> &'static str {
        match self {
            Self::Neural => "Multilingual Translator API",
            Self::Dictionary => "Multilingual Translator API (Demo Version)",
        }
    }

    /// Extra note reported by the health endpoint.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            Self::Neural => None,
            Self::Dictionary => Some(
                "This is a demo version with mock translations. \
                 For production use, run with TRANSLATOR_ENGINE=neural.",
            ),
        }
    }

    /// The neural backend only recognizes non-Latin scripts; the demo backend
    /// also guesses Spanish, French and German from accented letters.
    pub fn default_detection_policy(&self) -> DetectionPolicy {
        match self {
            Self::Neural => DetectionPolicy::ScriptOnly,
            Self::Dictionary => DetectionPolicy::LatinAccents,
        }
    }
}

impl FromStr for EngineKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "neural" | "marian" | "model" => Ok(Self::Neural),
            "dictionary" | "mock" | "simple" | "demo" => Ok(Self::Dictionary),
            other => bail!("Unknown translation engine '{}'", other),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved translator for one language pair (a loaded model or a phrase table).
#[async_trait]
pub trait EngineHandle: Send + Sync {
    /// Short human-readable identifier, used in logs.
    fn describe(&self) -> String;

    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

/// Capability interface shared by every translation backend.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    /// Resolve the handle for `pair`, loading it on first use.
    ///
    /// Fails with [`TranslateError::UnsupportedPair`] when the backend has no
    /// mapping for the ordered pair.
    async fn resolve(&self, pair: LanguagePair) -> Result<Arc<dyn EngineHandle>, TranslateError>;

    /// Translate `text` from `pair.source` to `pair.target`.
    async fn translate(&self, text: &str, pair: LanguagePair) -> Result<String, TranslateError> {
        let handle = self.resolve(pair).await?;
        handle.translate(text).await
    }
}

/// Factory for creating the configured translation engine.
pub struct EngineFactory;

impl EngineFactory {
    pub fn create(config: &Config) -> Result<Arc<dyn TranslationEngine>> {
        info!(
            "Initializing {} translation engine (model cache {})",
            config.engine,
            if config.cache_models { "enabled" } else { "disabled" }
        );

        match config.engine {
            EngineKind::Neural => {
                let client = reqwest::Client::builder()
                    .timeout(Duration::from_secs(config.model_request_timeout_secs))
                    .build()
                    .context("Failed to create HTTP client")?;

                let settings = NeuralSettings::from_config(config);
                let cache = ModelCache::new(config.cache_models);
                Ok(Arc::new(NeuralEngine::new(client, settings, cache)))
            }
            EngineKind::Dictionary => {
                let cache = ModelCache::new(config.cache_models);
                Ok(Arc::new(DictionaryEngine::new(cache)))
            }
        }
    }
}

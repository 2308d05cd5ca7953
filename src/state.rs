use std::sync::Arc;

use crate::config::Config;
use crate::detection::DetectionPolicy;
use crate::engine::TranslationEngine;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<dyn TranslationEngine>,
    pub detection_policy: DetectionPolicy,
}

impl AppState {
    /// The detection policy follows the engine unless `DETECT_LATIN_ACCENTS`
    /// overrides it.
    pub fn new(config: Config, engine: Arc<dyn TranslationEngine>) -> Self {
        let detection_policy = config
            .detect_latin_accents
            .map(DetectionPolicy::from_flag)
            .unwrap_or_else(|| engine.kind().default_detection_policy());

        Self {
            config: Arc::new(config),
            engine,
            detection_policy,
        }
    }
}

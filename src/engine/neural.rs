//! Neural backend: MarianMT models served by a Hugging Face-compatible API.
//!
//! Loading a model means asking the model hub for the checkpoint's metadata,
//! which proves the model exists and that the configured credential can reach
//! it. Inference posts the input to `{inference_url}/models/{model_id}` with
//! fixed beam-search parameters and no sampling, so identical input gives
//! identical output.

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::routes::model_id_for;
use super::{EngineHandle, EngineKind, LanguagePair, ModelCache, TranslationEngine};
use crate::config::Config;
use crate::error::TranslateError;

/// Beam width used for every generation request
pub const NUM_BEAMS: u32 = 4;

/// Upper bound on generated sequence length
pub const MAX_OUTPUT_LENGTH: u32 = 512;

/// Connection settings for the model provider.
#[derive(Debug, Clone)]
pub struct NeuralSettings {
    pub inference_url: String,
    pub hub_url: String,
    pub token: Option<String>,
    /// Inputs longer than this many characters are cut before inference
    pub max_input_chars: usize,
}

impl NeuralSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            inference_url: config.hf_inference_url.clone(),
            hub_url: config.hf_hub_url.clone(),
            token: config.hf_token.clone(),
            max_input_chars: config.max_text_length,
        }
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
    options: InferenceOptions,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GenerationParameters {
    num_beams: u32,
    max_length: u32,
    early_stopping: bool,
    do_sample: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            num_beams: NUM_BEAMS,
            max_length: MAX_OUTPUT_LENGTH,
            early_stopping: true,
            do_sample: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

#[derive(Debug, Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

/// Subset of the hub's model metadata. The hub sends both `id` and `modelId`.
#[derive(Debug, Deserialize)]
struct ModelInfo {
    id: Option<String>,
    #[serde(rename = "modelId")]
    model_id: Option<String>,
    pipeline_tag: Option<String>,
}

/// Cut `text` to at most `max_chars` characters, always on a char boundary.
pub fn truncate_input(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// A loaded MarianMT checkpoint for one language pair.
#[derive(Debug)]
pub struct MarianModel {
    model_id: &'static str,
    pair: LanguagePair,
    endpoint: String,
    client: reqwest::Client,
    token: Option<String>,
    max_input_chars: usize,
}

impl MarianModel {
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn generate(&self, text: &str) -> anyhow::Result<String> {
        let input = truncate_input(text, self.max_input_chars);
        if input.len() < text.len() {
            debug!(
                "Truncated input for {} to {} characters",
                self.model_id, self.max_input_chars
            );
        }

        let request = InferenceRequest {
            inputs: input,
            parameters: GenerationParameters::default(),
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: true,
            },
        };

        let response = self
            .authorize(self.client.post(&self.endpoint))
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to send inference request for {}", self.model_id))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Inference API error for {} ({}): {}", self.model_id, status, body);
        }

        let outputs: Vec<TranslationOutput> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse inference response for {}", self.model_id))?;

        let translated = outputs
            .into_iter()
            .next()
            .map(|o| o.translation_text.trim().to_string())
            .context("Inference response contained no translations")?;

        Ok(translated)
    }
}

#[async_trait]
impl EngineHandle for MarianModel {
    fn describe(&self) -> String {
        format!("{} ({})", self.model_id, self.pair)
    }

    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.generate(text).await.map_err(TranslateError::Engine)
    }
}

pub struct NeuralEngine {
    client: reqwest::Client,
    settings: NeuralSettings,
    cache: ModelCache<MarianModel>,
}

impl NeuralEngine {
    pub fn new(
        client: reqwest::Client,
        settings: NeuralSettings,
        cache: ModelCache<MarianModel>,
    ) -> Self {
        Self {
            client,
            settings,
            cache,
        }
    }

    pub fn cache(&self) -> &ModelCache<MarianModel> {
        &self.cache
    }

    async fn load_model(
        &self,
        pair: LanguagePair,
        model_id: &'static str,
    ) -> Result<Arc<MarianModel>, TranslateError> {
        info!("Loading model: {}", model_id);

        let url = format!("{}/api/models/{}", self.settings.hub_url, model_id);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Error loading model {}: {}", model_id, e);
            TranslateError::ModelLoad {
                model_id: model_id.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Error loading model {}: hub returned {}", model_id, status);
            return Err(TranslateError::ModelLoad {
                model_id: model_id.to_string(),
                reason: format!("model hub returned {}", status),
            });
        }

        match response.json::<ModelInfo>().await {
            Ok(info) => {
                if let Some(tag) = info.pipeline_tag.as_deref() {
                    if tag != "translation" {
                        warn!("Model {} reports pipeline '{}', expected 'translation'", model_id, tag);
                    }
                }
                debug!(
                    "Model metadata for {}: id={}",
                    model_id,
                    info.model_id.or(info.id).as_deref().unwrap_or(model_id)
                );
            }
            Err(e) => warn!("Could not read metadata for {}: {}", model_id, e),
        }

        Ok(Arc::new(MarianModel {
            model_id,
            pair,
            endpoint: format!("{}/models/{}", self.settings.inference_url, model_id),
            client: self.client.clone(),
            token: self.settings.token.clone(),
            max_input_chars: self.settings.max_input_chars,
        }))
    }
}

#[async_trait]
impl TranslationEngine for NeuralEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Neural
    }

    async fn resolve(&self, pair: LanguagePair) -> Result<Arc<dyn EngineHandle>, TranslateError> {
        let model_id = model_id_for(pair).ok_or(TranslateError::UnsupportedPair {
            source_lang: pair.source,
            target_lang: pair.target,
        })?;

        let model = self
            .cache
            .get_or_load(pair, || self.load_model(pair, model_id))
            .await?;

        Ok(model as Arc<dyn EngineHandle>)
    }
}

use anyhow::{bail, Context, Result};
use std::str::FromStr;

use crate::engine::EngineKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "testing" | "test" => Ok(Self::Testing),
            other => bail!("Unknown APP_ENV '{}'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,

    // Server
    pub host: String,
    pub port: u16,
    pub static_dir: String,

    // Translation backend
    pub engine: EngineKind,
    pub max_text_length: usize,
    pub cache_models: bool,
    /// `None` means "use the backend's default policy"
    pub detect_latin_accents: Option<bool>,

    // Model provider
    pub hf_token: Option<String>,
    pub hf_inference_url: String,
    pub hf_hub_url: String,
    pub model_request_timeout_secs: u64,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: "static".to_string(),
            engine: EngineKind::Neural,
            max_text_length: 1000,
            cache_models: true,
            detect_latin_accents: None,
            hf_token: None,
            hf_inference_url: "https://api-inference.huggingface.co".to_string(),
            hf_hub_url: "https://huggingface.co".to_string(),
            model_request_timeout_secs: 120,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: match std::env::var("APP_ENV") {
                Ok(v) => v.parse::<Environment>().context("APP_ENV is invalid")?,
                Err(_) => defaults.environment,
            },

            // Server
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: match std::env::var("PORT") {
                Ok(v) => v
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
                Err(_) => defaults.port,
            },
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),

            // Translation backend
            engine: match std::env::var("TRANSLATOR_ENGINE") {
                Ok(v) => v.parse::<EngineKind>().context("TRANSLATOR_ENGINE is invalid")?,
                Err(_) => defaults.engine,
            },
            max_text_length: std::env::var("MAX_TEXT_LENGTH")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_text_length),
            cache_models: std::env::var("CACHE_MODELS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_models),
            detect_latin_accents: std::env::var("DETECT_LATIN_ACCENTS")
                .ok()
                .map(|v| parse_flag(&v)),

            // Model provider
            hf_token: std::env::var("HF_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            hf_inference_url: std::env::var("HF_INFERENCE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.hf_inference_url),
            hf_hub_url: std::env::var("HF_HUB_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.hf_hub_url),
            model_request_timeout_secs: std::env::var("MODEL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.model_request_timeout_secs),

            // Logging
            log_level: std::env::var("LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or(defaults.log_level),
        })
    }
}

/// Only a literal "true" (any case) enables a flag.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

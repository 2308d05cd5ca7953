//! HTTP surface: JSON API routes plus the front-end's static assets.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::detection::detect;
use crate::engine::LanguagePair;
use crate::error::{ApiError, ApiResult};
use crate::i18n::{Language, LanguageRegistry};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);

    Router::new()
        // Health check
        .route("/health", get(health_check))

        // REST API routes
        .route("/api/languages", get(get_languages))
        .route("/api/translate", post(translate))
        .route("/api/detect", post(detect_language))

        // Front-end page, PWA manifest and service worker
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/manifest.json", ServeFile::new(static_dir.join("manifest.json")))
        .route_service("/sw.js", ServeFile::new(static_dir.join("sw.js")))
        .nest_service("/static", ServeDir::new(&static_dir))

        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Incoming `/api/translate` body after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    /// Trimmed input text
    pub text: String,
    /// Lower-cased, otherwise untouched
    pub source_lang: String,
    /// Lower-cased, otherwise untouched
    pub target_lang: String,
}

impl TranslateRequest {
    /// Fields that are absent or not strings are treated as empty.
    pub fn from_json(body: &Map<String, Value>) -> Self {
        Self {
            text: string_field(body, "text").trim().to_string(),
            source_lang: string_field(body, "source_lang").to_lowercase(),
            target_lang: string_field(body, "target_lang").to_lowercase(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub success: bool,
    pub translated_text: String,
    pub source_lang: &'static str,
    pub target_lang: &'static str,
    pub original_text: String,
}

impl TranslateResponse {
    fn new(pair: LanguagePair, original_text: String, translated_text: String) -> Self {
        Self {
            success: true,
            translated_text,
            source_lang: pair.source.code(),
            target_lang: pair.target.code(),
            original_text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub success: bool,
    pub detected_language: &'static str,
    pub language_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub supported_languages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub success: bool,
    pub languages: LanguageMap,
}

/// Serializes the registry as `{code: name}` in registry order.
#[derive(Debug)]
pub struct LanguageMap;

impl Serialize for LanguageMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            LanguageRegistry::get()
                .list_all()
                .into_iter()
                .map(|lang| (lang.code, lang.name)),
        )
    }
}

fn string_field<'a>(body: &'a Map<String, Value>, key: &str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Look `code` up in the registry; `role` prefixes the 400 message.
fn supported_language(code: &str, role: &str) -> ApiResult<Language> {
    let unsupported =
        || ApiError::bad_request(format!("{} language \"{}\" is not supported", role, code));

    if !LanguageRegistry::get().is_supported(code) {
        return Err(unsupported());
    }
    Language::from_code(code).map_err(|_| unsupported())
}

/// A usable body is a non-empty JSON object; anything else counts as no data.
fn json_object(body: Option<Json<Value>>) -> ApiResult<Map<String, Value>> {
    match body {
        Some(Json(Value::Object(map))) if !map.is_empty() => Ok(map),
        _ => Err(ApiError::bad_request("No JSON data provided")),
    }
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let kind = state.engine.kind();
    Json(HealthResponse {
        status: "healthy",
        service: kind.service_name(),
        supported_languages: LanguageRegistry::get().len(),
        note: kind.note(),
    })
}

async fn get_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        success: true,
        languages: LanguageMap,
    })
}

async fn translate(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<TranslateResponse>> {
    let body = json_object(body)?;
    let request = TranslateRequest::from_json(&body);

    if request.text.is_empty() {
        return Err(ApiError::bad_request("Text is required"));
    }

    if request.source_lang.is_empty() || request.target_lang.is_empty() {
        return Err(ApiError::bad_request(
            "Source and target languages are required",
        ));
    }

    let source = supported_language(&request.source_lang, "Source")?;
    let target = supported_language(&request.target_lang, "Target")?;

    let pair = LanguagePair::new(source, target);

    if source == target {
        debug!("Same source and target ({}), echoing input", source);
        let text = request.text;
        return Ok(Json(TranslateResponse::new(pair, text.clone(), text)));
    }

    let translated = state.engine.translate(&request.text, pair).await?;
    info!(
        "Translated {} characters {} -> {}",
        request.text.chars().count(),
        source,
        target
    );

    Ok(Json(TranslateResponse::new(pair, request.text, translated)))
}

async fn detect_language(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> ApiResult<Json<DetectResponse>> {
    let body = json_object(body)?;
    let text = string_field(&body, "text").trim();

    if text.is_empty() {
        return Err(ApiError::bad_request("Text is required"));
    }

    let detected = detect(text, state.detection_policy);
    debug!("Detected language {} ({:?})", detected, state.detection_policy);

    Ok(Json(DetectResponse {
        success: true,
        detected_language: detected.code(),
        language_name: detected.name(),
    }))
}

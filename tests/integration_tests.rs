//! Integration tests for the Multilingual Translator API
//!
//! These tests drive the full router in-process with `tower::ServiceExt`,
//! using the dictionary engine, a mocked model provider for the neural
//! engine, and small engine doubles for failure paths.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use multilingual_translator::{
    config::Config,
    engine::{
        DictionaryEngine, EngineHandle, EngineKind, LanguagePair, ModelCache, NeuralEngine,
        NeuralSettings, TranslationEngine,
    },
    error::TranslateError,
    i18n::LanguageRegistry,
    routes::create_router,
    state::AppState,
};

// ==================== Test Helpers ====================

fn test_config() -> Config {
    Config {
        engine: EngineKind::Dictionary,
        static_dir: "static".to_string(),
        ..Config::default()
    }
}

fn dictionary_app() -> Router {
    let engine = Arc::new(DictionaryEngine::new(ModelCache::new(true)));
    create_router(AppState::new(test_config(), engine))
}

fn app_with(engine: Arc<dyn TranslationEngine>) -> Router {
    create_router(AppState::new(test_config(), engine))
}

/// Engine double whose handle always fails with an unexpected error.
struct BrokenEngine;

struct BrokenHandle;

#[async_trait]
impl EngineHandle for BrokenHandle {
    fn describe(&self) -> String {
        "broken".to_string()
    }

    async fn translate(&self, _text: &str) -> Result<String, TranslateError> {
        Err(anyhow::anyhow!("CUDA out of memory in Helsinki-NLP/opus-mt-en-es").into())
    }
}

#[async_trait]
impl TranslationEngine for BrokenEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Neural
    }

    async fn resolve(&self, _pair: LanguagePair) -> Result<Arc<dyn EngineHandle>, TranslateError> {
        Ok(Arc::new(BrokenHandle))
    }
}

/// Engine double that counts how often it is asked to translate.
#[derive(Default)]
struct CountingEngine {
    calls: AtomicUsize,
}

struct UppercaseHandle;

#[async_trait]
impl EngineHandle for UppercaseHandle {
    fn describe(&self) -> String {
        "uppercase".to_string()
    }

    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        Ok(text.to_uppercase())
    }
}

#[async_trait]
impl TranslationEngine for CountingEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Neural
    }

    async fn resolve(&self, _pair: LanguagePair) -> Result<Arc<dyn EngineHandle>, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(UppercaseHandle))
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request should complete");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn translate(app: Router, body: Value) -> (StatusCode, Value) {
    send(app, post_json("/api/translate", body)).await
}

fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, message: &str) {
    assert_eq!(status, expected_status, "body: {}", body);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], message);
}

// ==================== Health & Languages ====================

#[tokio::test]
async fn test_health_dictionary_engine() {
    let (status, body) = send(dictionary_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "Multilingual Translator API (Demo Version)");
    assert_eq!(body["supported_languages"], 21);
    assert!(body["note"].as_str().unwrap().contains("demo version"));
}

#[tokio::test]
async fn test_health_neural_engine_has_no_note() {
    let (status, body) = send(app_with(Arc::new(CountingEngine::default())), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "Multilingual Translator API");
    assert!(body.get("note").is_none());
}

#[tokio::test]
async fn test_languages_returns_full_registry() {
    let (status, body) = send(dictionary_app(), get("/api/languages")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let languages = body["languages"].as_object().expect("languages object");
    assert_eq!(languages.len(), 21);
    for lang in LanguageRegistry::get().list_all() {
        assert_eq!(languages[lang.code], lang.name);
    }
}

// ==================== Translate Validation ====================

#[tokio::test]
async fn test_translate_without_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(dictionary_app(), request).await;

    assert_error(status, &body, StatusCode::BAD_REQUEST, "No JSON data provided");
}

#[tokio::test]
async fn test_translate_with_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"text\": "))
        .unwrap();
    let (status, body) = send(dictionary_app(), request).await;

    assert_error(status, &body, StatusCode::BAD_REQUEST, "No JSON data provided");
}

#[tokio::test]
async fn test_translate_with_empty_object() {
    let (status, body) = translate(dictionary_app(), json!({})).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "No JSON data provided");
}

#[tokio::test]
async fn test_translate_missing_text() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "source_lang": "en", "target_lang": "es" }),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Text is required");
}

#[tokio::test]
async fn test_translate_whitespace_text() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "   \n\t", "source_lang": "en", "target_lang": "es" }),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Text is required");
}

#[tokio::test]
async fn test_text_checked_before_languages() {
    let (status, body) = translate(dictionary_app(), json!({ "source_lang": "xx" })).await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Text is required");
}

#[tokio::test]
async fn test_translate_missing_source() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "Hello", "target_lang": "es" }),
    )
    .await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Source and target languages are required",
    );
}

#[tokio::test]
async fn test_translate_missing_target() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "Hello", "source_lang": "en" }),
    )
    .await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Source and target languages are required",
    );
}

#[tokio::test]
async fn test_translate_unsupported_source() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "Hello", "source_lang": "xx", "target_lang": "yy" }),
    )
    .await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Source language \"xx\" is not supported",
    );
}

#[tokio::test]
async fn test_translate_unsupported_target() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "Hello", "source_lang": "en", "target_lang": "Klingon" }),
    )
    .await;
    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Target language \"klingon\" is not supported",
    );
}

// ==================== Translate Behaviour ====================

#[tokio::test]
async fn test_translate_dictionary_placeholder() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "Hello, world!", "source_lang": "en", "target_lang": "es" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["translated_text"], "[Traducido al español] Hello, world!");
    assert_eq!(body["source_lang"], "en");
    assert_eq!(body["target_lang"], "es");
    assert_eq!(body["original_text"], "Hello, world!");
}

#[tokio::test]
async fn test_translate_dictionary_phrase_hit_with_uppercase_codes() {
    let (status, body) = translate(
        dictionary_app(),
        json!({ "text": "  Thank you ", "source_lang": "EN", "target_lang": "FR" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated_text"], "merci");
    assert_eq!(body["source_lang"], "en");
    assert_eq!(body["target_lang"], "fr");
    assert_eq!(body["original_text"], "Thank you");
}

#[tokio::test]
async fn test_same_language_echoes_without_calling_engine() {
    let engine = Arc::new(CountingEngine::default());
    let app = app_with(engine.clone());

    let (status, body) = translate(
        app,
        json!({ "text": "Bonjour", "source_lang": "fr", "target_lang": "fr" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translated_text"], "Bonjour");
    assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_engine_failure_is_generic_500() {
    let (status, body) = translate(
        app_with(Arc::new(BrokenEngine)),
        json!({ "text": "Hello", "source_lang": "en", "target_lang": "es" }),
    )
    .await;

    assert_error(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    );
    assert!(!body.to_string().contains("CUDA"));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let app = dictionary_app();
    let request = json!({ "text": "How are you", "source_lang": "en", "target_lang": "de" });

    let (_, first) = translate(app.clone(), request.clone()).await;
    let (_, second) = translate(app, request).await;

    assert_eq!(first, second);
    assert_eq!(first["translated_text"], "wie geht es dir");
}

// ==================== Neural Engine Through The API ====================

fn neural_app(server: &MockServer) -> Router {
    let settings = NeuralSettings {
        inference_url: server.uri(),
        hub_url: server.uri(),
        token: None,
        max_input_chars: 1000,
    };
    let engine = NeuralEngine::new(reqwest::Client::new(), settings, ModelCache::new(true));
    app_with(Arc::new(engine))
}

#[tokio::test]
async fn test_neural_unsupported_pair_is_400() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (status, body) = translate(
        neural_app(&server),
        json!({ "text": "Bonjour", "source_lang": "fr", "target_lang": "de" }),
    )
    .await;

    assert_error(
        status,
        &body,
        StatusCode::BAD_REQUEST,
        "Translation from fr to de is not supported",
    );
}

#[tokio::test]
async fn test_neural_translation_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/Helsinki-NLP/opus-mt-en-es"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "modelId": "Helsinki-NLP/opus-mt-en-es" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/Helsinki-NLP/opus-mt-en-es"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "translation_text": "¡Hola, mundo!" }])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let app = neural_app(&server);
    let request = json!({ "text": "Hello, world!", "source_lang": "en", "target_lang": "es" });

    let (status, first) = translate(app.clone(), request.clone()).await;
    let (_, second) = translate(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["translated_text"], "¡Hola, mundo!");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_neural_model_load_failure_is_500() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/Helsinki-NLP/opus-mt-en-ru"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let (status, body) = translate(
        neural_app(&server),
        json!({ "text": "Hello", "source_lang": "en", "target_lang": "ru" }),
    )
    .await;

    assert_error(
        status,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    );
}

// ==================== Detect ====================

async fn detect(app: Router, text: &str) -> (StatusCode, Value) {
    send(app, post_json("/api/detect", json!({ "text": text }))).await
}

#[tokio::test]
async fn test_detect_examples() {
    let cases = [
        ("Hello world", "en", "English"),
        ("世界", "zh", "Chinese"),
        ("안녕하세요", "ko", "Korean"),
        ("Привет", "ru", "Russian"),
        ("こんにちは", "ja", "Japanese"),
    ];

    for (text, code, name) in cases {
        let (status, body) = detect(dictionary_app(), text).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["detected_language"], code, "text: {}", text);
        assert_eq!(body["language_name"], name);
    }
}

#[tokio::test]
async fn test_detect_latin_accents_depend_on_engine() {
    let (_, body) = detect(dictionary_app(), "¿Qué tal?").await;
    assert_eq!(body["detected_language"], "es");

    let (_, body) = detect(app_with(Arc::new(CountingEngine::default())), "¿Qué tal?").await;
    assert_eq!(body["detected_language"], "en");
}

#[tokio::test]
async fn test_detect_requires_text() {
    let (status, body) = detect(dictionary_app(), "   ").await;
    assert_error(status, &body, StatusCode::BAD_REQUEST, "Text is required");
}

#[tokio::test]
async fn test_detect_without_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/detect")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(dictionary_app(), request).await;

    assert_error(status, &body, StatusCode::BAD_REQUEST, "No JSON data provided");
}

// ==================== Static Assets ====================

#[tokio::test]
async fn test_static_assets_served_from_configured_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("index.html"), "<h1>Translator</h1>").unwrap();
    std::fs::write(temp_dir.path().join("manifest.json"), "{\"name\":\"Translator\"}").unwrap();
    std::fs::write(temp_dir.path().join("sw.js"), "self.addEventListener('fetch', () => {});")
        .unwrap();
    std::fs::create_dir(temp_dir.path().join("js")).unwrap();
    std::fs::write(temp_dir.path().join("js/app.js"), "console.log('ok');").unwrap();

    let config = Config {
        static_dir: temp_dir.path().to_str().unwrap().to_string(),
        ..test_config()
    };
    let engine = Arc::new(DictionaryEngine::new(ModelCache::new(true)));
    let app = create_router(AppState::new(config, engine));

    for (uri, expected) in [
        ("/", "Translator"),
        ("/manifest.json", "Translator"),
        ("/sw.js", "addEventListener"),
        ("/static/js/app.js", "console.log"),
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "uri: {}", uri);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains(expected), "uri: {}", uri);
    }
}

// ==================== Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_same_language_is_identity(
        index in 0usize..21,
        text in "[A-Za-z0-9][A-Za-z0-9 ,.!?]{0,40}[A-Za-z0-9]",
    ) {
        let code = LanguageRegistry::get().list_all()[index].code;
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let (status, body) = runtime.block_on(translate(
            dictionary_app(),
            json!({ "text": text, "source_lang": code, "target_lang": code }),
        ));

        prop_assert_eq!(status, StatusCode::OK);
        prop_assert_eq!(body["translated_text"].as_str(), Some(text.as_str()));
    }

    #[test]
    fn prop_unknown_source_codes_are_named_in_error(
        code in "[a-z]{3,6}",
        target_index in 0usize..21,
    ) {
        let target = LanguageRegistry::get().list_all()[target_index].code;
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let (status, body) = runtime.block_on(translate(
            dictionary_app(),
            json!({ "text": "Hello", "source_lang": code, "target_lang": target }),
        ));

        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
        let expected = format!("Source language \"{}\" is not supported", code);
        prop_assert_eq!(body["error"].as_str(), Some(expected.as_str()));
    }

    #[test]
    fn prop_unknown_target_codes_are_named_in_error(code in "[a-z]{3,6}") {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let (status, body) = runtime.block_on(translate(
            dictionary_app(),
            json!({ "text": "Hello", "source_lang": "en", "target_lang": code }),
        ));

        prop_assert_eq!(status, StatusCode::BAD_REQUEST);
        let expected = format!("Target language \"{}\" is not supported", code);
        prop_assert_eq!(body["error"].as_str(), Some(expected.as_str()));
    }
}

//! Error types for the translation engines and the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::i18n::Language;

/// Errors raised while resolving or running a translation engine.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No engine mapping exists for the ordered pair.
    #[error("Translation from {source_lang} to {target_lang} is not supported")]
    UnsupportedPair {
        source_lang: Language,
        target_lang: Language,
    },

    #[error("Failed to load model {model_id}: {reason}")]
    ModelLoad { model_id: String, reason: String },

    #[error(transparent)]
    Engine(#[from] anyhow::Error),
}

/// Application result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller mistake; the message is returned verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure; the detail is logged and replaced by a generic message.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller.
    pub fn public_message(&self) -> &str {
        match self {
            Self::BadRequest(message) => message,
            Self::Internal(_) => "Internal server error",
        }
    }
}

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::UnsupportedPair { .. } => Self::BadRequest(err.to_string()),
            TranslateError::Engine(inner) => Self::Internal(format!("{:#}", inner)),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal(detail) => tracing::error!(error = %detail, "Unexpected error"),
            Self::BadRequest(message) => tracing::debug!(error = %message, "Rejected request"),
        }

        let body = Json(json!({
            "success": false,
            "error": self.public_message(),
        }));

        (status, body).into_response()
    }
}

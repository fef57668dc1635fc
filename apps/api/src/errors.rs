use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::search::query::QueryError;
use crate::search::sanitizer::SanitizeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(#[from] QueryError),

    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid upstream format: {0}")]
    InvalidFormat(#[from] SanitizeError),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingApiKey => AppError::MissingApiKey,
            other => AppError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, Value) = match &self {
            AppError::BadRequest(e) => (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() })),
            AppError::MissingApiKey => {
                tracing::error!("Search requested but OPENAI_API_KEY is not set");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "OPENAI_API_KEY fehlt auf dem Server",
                        "hint": "Bitte Environment Variable setzen."
                    }),
                )
            }
            AppError::Upstream(details) => {
                tracing::error!("LLM error: {details}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Fehler bei OpenAI Anfrage",
                        "details": details
                    }),
                )
            }
            AppError::InvalidFormat(e) => {
                tracing::warn!("Model output rejected: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Antwort war kein valides JSON-Array",
                        "raw": e.raw()
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::tts::provider::ProviderError;

pub const TERMS_URL: &str = "https://console.groq.com/playground?model=playai-tts";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Unsupported voice '{0}'")]
    UnsupportedVoice(String),

    #[error("Unsupported format '{0}'")]
    UnsupportedFormat(String),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Provider terms not accepted for model {0}")]
    UpstreamTerms(String),

    #[error("Provider request failed: {0}")]
    Upstream(String),

    #[error("Provider did not respond within {0}s")]
    UpstreamTimeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::TermsNotAccepted { model } => AppError::UpstreamTerms(model),
            ProviderError::Timeout { secs } => AppError::UpstreamTimeout(secs),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedVoice(_) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_VOICE", self.to_string())
            }
            AppError::UnsupportedFormat(_) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", self.to_string())
            }
            AppError::Json(_) => (StatusCode::BAD_REQUEST, "INVALID_JSON", self.to_string()),
            AppError::UpstreamTerms(_) => (
                StatusCode::BAD_REQUEST,
                "TERMS_NOT_ACCEPTED",
                format!("Please accept the playai-tts terms at {}", TERMS_URL),
            ),
            AppError::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UPSTREAM_ERROR",
                format!("Server error: {}", msg),
            ),
            AppError::UpstreamTimeout(_) => (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                self.to_string(),
            ),
            AppError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "IO_ERROR",
                format!("Server error: {}", e),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!("Request failed: {} - {}", code, message);
        } else {
            tracing::warn!("Request rejected: {} - {}", code, message);
        }

        (
            status,
            Json(ErrorResponse {
                message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

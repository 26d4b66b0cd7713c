use async_trait::async_trait;

use super::SynthesisRequest;

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("usage terms for model {model} have not been accepted")]
    TermsNotAccepted { model: String },

    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("provider timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned no audio")]
    EmptyAudio,
}

/// A remote speech synthesis backend.
#[async_trait]
pub trait SpeechProvider: Send + Sync {
    /// Synthesize the request and return the encoded audio bytes.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError>;
}

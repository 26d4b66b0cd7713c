use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::provider::{ProviderError, SpeechProvider};
use super::SynthesisRequest;

const TERMS_REQUIRED_CODE: &str = "model_terms_required";

/// Client for Groq's OpenAI-compatible speech endpoint.
pub struct GroqClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl GroqClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        model: &str,
        timeout_secs: u64,
    ) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout_secs,
        })
    }

    fn map_transport(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            ProviderError::Network(err.to_string())
        }
    }

    fn map_status(&self, status: StatusCode, body: &str) -> ProviderError {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if envelope.error.code.as_deref() == Some(TERMS_REQUIRED_CODE) => {
                ProviderError::TermsNotAccepted {
                    model: self.model.clone(),
                }
            }
            Ok(envelope) => ProviderError::Api {
                status: status.as_u16(),
                message: envelope.error.message,
            },
            Err(_) => ProviderError::Api {
                status: status.as_u16(),
                message: body.trim().to_string(),
            },
        }
    }
}

#[async_trait]
impl SpeechProvider for GroqClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/audio/speech", self.base_url);
        let body = SpeechBody {
            model: &self.model,
            voice: &request.voice,
            input: &request.text,
            response_format: request.format.extension(),
        };

        tracing::debug!("POST {} (voice={})", url, request.voice);

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(|e| self.map_transport(e))?;
            return Err(self.map_status(status, &text));
        }

        let audio = response.bytes().await.map_err(|e| self.map_transport(e))?;
        if audio.is_empty() {
            return Err(ProviderError::EmptyAudio);
        }

        Ok(audio.to_vec())
    }
}

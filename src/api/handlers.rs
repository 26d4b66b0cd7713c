use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, SubmitRequest, SubmitResponse};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::tts::{SynthesisRequest, VoiceInfo};

/// Accepts a JSON body whatever the declared content type.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let request: SubmitRequest = serde_json::from_slice(&body)?;

    let voice = match &request.voice {
        None => None,
        Some(Some(voice)) => Some(voice.as_str()),
        Some(None) => Some("null"),
    };

    let synthesis = SynthesisRequest::validate(
        request.text.as_deref(),
        voice,
        request.format.as_deref(),
    )?;

    let task_id = state.tts.submit(&synthesis).await?;

    Ok(Json(SubmitResponse { task_id }))
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> Result<Response, AppError> {
    match state.tts.fetch(&task_id).await? {
        Some(audio) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, audio.content_type)],
            audio.bytes,
        )
            .into_response()),
        // Still processing as far as the client can tell.
        None => Ok(StatusCode::ACCEPTED.into_response()),
    }
}

pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<Vec<VoiceInfo>> {
    Json(state.tts.list_voices())
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tasks: state.tts.registry().len(),
    })
}

pub mod handlers;
pub mod routes;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub text: Option<String>,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present")]
    pub voice: Option<Option<String>>,
    #[serde(default)]
    pub format: Option<String>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub task_id: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub tasks: usize,
}

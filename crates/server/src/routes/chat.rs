use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::brain::SharedBrain;
use crate::chat::{self, ChatContext};
use crate::error::AppError;
use crate::extract::ApiJson;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    /// Free-form client context, only logged.
    pub context: Option<JsonValue>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub games_learned: u64,
}

/// POST /chat
pub async fn chat(
    Extension(brain): Extension<SharedBrain>,
    ApiJson(req): ApiJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = req
        .message
        .ok_or_else(|| AppError::BadRequest("Message is required".into()))?;

    tracing::debug!(has_context = req.context.is_some(), "Chat message received");

    let ctx = brain.read(|b| ChatContext {
        games_learned: b.games_played,
        difficulty: b.difficulty,
    });
    let response = chat::reply(&message, ctx, &mut rand::rng());

    Ok(Json(ChatResponse {
        response,
        games_learned: ctx.games_learned,
    }))
}

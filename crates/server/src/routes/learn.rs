use axum::{Extension, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::brain::{FinishedGame, LearnSummary, SharedBrain};
use crate::error::AppError;
use crate::extract::ApiJson;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnRequest {
    pub game_data: Option<FinishedGame>,
}

#[derive(Serialize)]
pub struct LearnResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(flatten)]
    pub summary: LearnSummary,
}

/// POST /learn
/// Record a finished game in the opponent's notebook.
pub async fn learn_from_game(
    Extension(brain): Extension<SharedBrain>,
    ApiJson(req): ApiJson<LearnRequest>,
) -> Result<Json<LearnResponse>, AppError> {
    let game = req
        .game_data
        .ok_or_else(|| AppError::BadRequest("Game data is required".into()))?;

    tracing::info!(
        game_id = game.game_id.as_deref().unwrap_or("-"),
        moves = game.moves.len(),
        result = game.result.as_deref().unwrap_or("unknown"),
        "Learning from game"
    );

    let summary = brain.write(|b| b.learn(&game, Utc::now()));
    brain.save().await;

    Ok(Json(LearnResponse {
        success: true,
        message: "Game data received for learning",
        summary,
    }))
}

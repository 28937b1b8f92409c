use axum::{Extension, Json};
use chess_core::difficulty::{opponent_rating_for, Difficulty};
use chess_core::rating::{self, GameOutcome};
use chess_core::stats::PlayerStats;
use serde::{Deserialize, Serialize};

use crate::brain::{BrainStats, SharedBrain};
use crate::error::AppError;
use crate::extract::ApiJson;

/// GET /stats
/// What the opponent has recorded so far.
pub async fn brain_stats(Extension(brain): Extension<SharedBrain>) -> Json<BrainStats> {
    Json(brain.read(|b| b.stats()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsRequest {
    #[serde(default)]
    pub stats: PlayerStats,
    pub outcome: Option<GameOutcome>,
    #[serde(default)]
    pub accuracy: u32,
    pub difficulty: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatsResponse {
    pub stats: PlayerStats,
    pub rating_change: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_difficulty: Option<Difficulty>,
}

/// POST /stats/game
/// Fold a finished game into the client's counters and rating.
pub async fn record_game(
    ApiJson(req): ApiJson<GameStatsRequest>,
) -> Result<Json<GameStatsResponse>, AppError> {
    let outcome = req
        .outcome
        .ok_or_else(|| AppError::BadRequest("Outcome is required".into()))?;
    let accuracy = req.accuracy.min(100);

    let mut stats = req.stats;
    let before = stats.rating;
    let opponent = opponent_rating_for(req.difficulty.as_deref());
    stats.record_game(outcome, accuracy);
    stats.apply_rating(rating::updated_rating(before, opponent, outcome));

    let suggested_difficulty = req
        .difficulty
        .as_deref()
        .and_then(Difficulty::parse)
        .map(|d| d.adapt_to_accuracy(accuracy));

    Ok(Json(GameStatsResponse {
        rating_change: i64::from(stats.rating) - i64::from(before),
        stats,
        suggested_difficulty,
    }))
}

#[derive(Deserialize)]
pub struct PuzzleStatsRequest {
    #[serde(default)]
    pub stats: PlayerStats,
    pub correct: Option<bool>,
}

/// POST /stats/puzzle
pub async fn record_puzzle(
    ApiJson(req): ApiJson<PuzzleStatsRequest>,
) -> Result<Json<PlayerStats>, AppError> {
    let correct = req
        .correct
        .ok_or_else(|| AppError::BadRequest("Field 'correct' is required".into()))?;
    let mut stats = req.stats;
    stats.record_puzzle(correct);
    Ok(Json(stats))
}

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::puzzles::{self, Attempt, PuzzleRecord};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleRequest {
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub from_history: Option<bool>,
}

#[derive(Serialize)]
pub struct PuzzleResponse {
    pub puzzle: &'static PuzzleRecord,
}

/// POST /puzzle
/// Random puzzle, optionally restricted to one difficulty.
pub async fn get_puzzle(
    ApiJson(req): ApiJson<PuzzleRequest>,
) -> Result<Json<PuzzleResponse>, AppError> {
    tracing::debug!(
        difficulty = ?req.difficulty,
        category = ?req.category,
        from_history = ?req.from_history,
        "Puzzle requested"
    );

    let difficulty = req.difficulty.as_deref();
    let puzzle = puzzles::pick(difficulty, &mut rand::rng()).ok_or_else(|| {
        AppError::NotFound(format!(
            "No puzzle for difficulty {}",
            difficulty.unwrap_or(puzzles::MIXED)
        ))
    })?;

    Ok(Json(PuzzleResponse { puzzle }))
}

#[derive(Deserialize)]
pub struct CheckRequest {
    pub fen: Option<String>,
    #[serde(rename = "move")]
    pub san: Option<String>,
}

/// POST /puzzle/check
/// Compare a move against the puzzle's solution.
pub async fn check_solution(
    ApiJson(req): ApiJson<CheckRequest>,
) -> Result<Json<Attempt>, AppError> {
    let (Some(fen), Some(san)) = (req.fen.as_deref(), req.san.as_deref()) else {
        return Err(AppError::BadRequest("FEN and move are required".into()));
    };
    let puzzle = puzzles::find_by_fen(fen)
        .ok_or_else(|| AppError::NotFound("Unknown puzzle position".into()))?;

    Ok(Json(puzzles::attempt(puzzle, san)?))
}

use axum::{Extension, Json};
use chess_core::{eval, position};
use serde::{Deserialize, Serialize};
use shakmaty::Position;

use crate::brain::SharedBrain;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::opponent::{self, Personality};

#[derive(Deserialize)]
pub struct MoveRequest {
    pub fen: Option<String>,
    pub personality: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub san: String,
    pub uci: String,
    /// Position after the move.
    pub fen: String,
    pub evaluation: f64,
}

/// POST /game/move
/// Ask the house opponent for a reply in the given position.
pub async fn select_move(
    Extension(brain): Extension<SharedBrain>,
    ApiJson(req): ApiJson<MoveRequest>,
) -> Result<Json<MoveResponse>, AppError> {
    let fen = req
        .fen
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("FEN is required".into()))?;
    let pos = position::parse_fen(fen)?;

    let personality = req
        .personality
        .as_deref()
        .map(Personality::parse)
        .unwrap_or_default();
    brain.write(|b| b.personality = personality);

    let picked = opponent::select_move(&pos, req.difficulty.as_deref(), &mut rand::rng())?;

    let mut after = pos.clone();
    after.play_unchecked(picked.mv.clone());

    tracing::debug!(
        difficulty = req.difficulty.as_deref().unwrap_or("default"),
        personality = personality.as_str(),
        san = %picked.san,
        "Opponent move selected"
    );

    Ok(Json(MoveResponse {
        san: picked.san,
        uci: picked.uci,
        fen: position::to_fen(&after),
        evaluation: eval::evaluate(&after),
    }))
}

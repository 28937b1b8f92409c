use axum::Json;
use chess_core::difficulty::opponent_rating_for;
use chess_core::pgn;
use chess_core::position::parse_color;
use chess_core::session::GameSession;
use serde::{Deserialize, Serialize};
use shakmaty::Color;

use crate::analysis::{self, AnalysisResult};
use crate::error::AppError;
use crate::extract::ApiJson;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GamePayload {
    pub moves: Option<Vec<String>>,
    pub pgn: Option<String>,
    pub result: Option<String>,
    pub player_color: Option<String>,
    pub difficulty: Option<String>,
    pub player_elo: Option<u32>,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub game: Option<GamePayload>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}

/// POST /analyze
/// Replays the game, then attaches a fabricated quality report.
pub async fn analyze_game(
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let missing = || AppError::BadRequest("Game data is required".into());
    let game = req.game.ok_or_else(missing)?;

    let (moves, pgn_result) = match (game.moves, game.pgn.as_deref()) {
        (Some(moves), _) => (moves, None),
        (None, Some(text)) => {
            let record = pgn::parse_pgn(text)?;
            let label = record.result_label();
            (record.moves, label)
        }
        (None, None) => return Err(missing()),
    };

    let player_color = game
        .player_color
        .as_deref()
        .and_then(parse_color)
        .unwrap_or(Color::White);
    let mut session = GameSession::replay(&moves, player_color)?;

    // Explicit result first, then the PGN header, then the replayed final position
    let result = game
        .result
        .or_else(|| pgn_result.map(String::from))
        .unwrap_or_else(|| session.result_label().to_string());

    let mut analysis = analysis::fabricate(&mut session, &result, &mut rand::rng());
    if let Some(player_elo) = game.player_elo {
        let ai_elo = opponent_rating_for(game.difficulty.as_deref());
        analysis.apply_rating(player_elo, ai_elo, player_color == Color::White);
    }

    tracing::info!(
        plies = analysis.plies,
        accuracy = analysis.accuracy,
        result = %analysis.result,
        "Game analyzed"
    );

    Ok(Json(AnalyzeResponse { analysis }))
}

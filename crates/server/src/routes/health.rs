use axum::{Extension, Json};
use serde_json::Value as JsonValue;

use crate::brain::SharedBrain;

/// GET /health
pub async fn health_check(Extension(brain): Extension<SharedBrain>) -> Json<JsonValue> {
    let (games_learned, difficulty) = brain.read(|b| (b.games_played, b.difficulty));
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "gamesLearned": games_learned,
        "difficulty": difficulty,
    }))
}

pub mod analysis;
pub mod brain;
pub mod chat;
pub mod config;
pub mod error;
pub mod extract;
pub mod opponent;
pub mod puzzles;
pub mod routes;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::brain::SharedBrain;
use crate::config::Config;

/// Build the application router around a shared brain.
pub fn router(config: &Config, brain: SharedBrain) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Opponent
        .route("/game/move", post(routes::game::select_move))
        .route("/analyze", post(routes::analysis::analyze_game))
        .route("/learn", post(routes::learn::learn_from_game))
        // Puzzles
        .route("/puzzle", post(routes::puzzle::get_puzzle))
        .route("/puzzle/check", post(routes::puzzle::check_solution))
        // Coach
        .route("/chat", post(routes::chat::chat))
        // Stats
        .route("/stats", get(routes::stats::brain_stats))
        .route("/stats/game", post(routes::stats::record_game))
        .route("/stats/puzzle", post(routes::stats::record_puzzle));

    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving static files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(Extension(brain))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

use std::sync::Arc;

use anyhow::Context;
use server::brain::{Brain, BrainStore};
use server::config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let brain = match &config.brain_path {
        Some(path) => Brain::load(path, config.brain_history_limit)?,
        None => {
            tracing::info!("BRAIN_PATH not set, learning stays in memory");
            Brain::new(config.brain_history_limit)
        }
    };
    let brain = brain.with_position_limit(config.brain_position_limit);
    let store = Arc::new(BrainStore::new(brain, config.brain_path.clone()));

    let app = server::router(&config, store);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

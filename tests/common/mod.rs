#![allow(dead_code)]

use std::sync::Arc;

use reqwest::Client;
use server::brain::{Brain, BrainStore, SharedBrain};
use server::config::Config;

/// A server bound to an ephemeral local port, with its brain exposed.
pub struct TestServer {
    pub base_url: String,
    pub brain: SharedBrain,
}

impl TestServer {
    /// Build a URL for an API endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spawn the full router in-process on 127.0.0.1:0.
pub async fn spawn() -> TestServer {
    let config = Config::default();
    let brain: SharedBrain = Arc::new(BrainStore::new(
        Brain::new(config.brain_history_limit),
        None,
    ));
    let app = server::router(&config, brain.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    TestServer {
        base_url: format!("http://{addr}"),
        brain,
    }
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

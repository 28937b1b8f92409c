//! Integration tests for puzzles, chat, stats and health.

mod common;

use serde_json::{json, Value};

const NXE5_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const BACK_RANK_FEN: &str = "6k1/5ppp/8/8/8/8/5PPP/6K1 w - - 0 1";

async fn post(server: &common::TestServer, path: &str, body: Value) -> reqwest::Response {
    common::client()
        .post(server.url(path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
}

// ---------------------------------------------------------------------------
// Puzzles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_easy_puzzle_is_never_medium() {
    let server = common::spawn().await;
    for _ in 0..20 {
        let resp = post(&server, "/puzzle", json!({ "difficulty": "Easy" })).await;
        assert_eq!(resp.status(), 200);
        let puzzle = &resp.json::<Value>().await.unwrap()["puzzle"];
        assert_eq!(puzzle["difficulty"], "Easy");
        assert_ne!(puzzle["solution"], "Nxe5");
    }
}

#[tokio::test]
async fn test_mixed_puzzle() {
    let server = common::spawn().await;
    let resp = post(&server, "/puzzle", json!({ "difficulty": "mixed", "category": "Tactics" })).await;
    assert_eq!(resp.status(), 200);
    let puzzle = &resp.json::<Value>().await.unwrap()["puzzle"];
    for field in ["fen", "solution", "category", "difficulty", "hint"] {
        assert!(puzzle[field].is_string(), "missing {field}");
    }
}

#[tokio::test]
async fn test_unknown_difficulty_is_not_found() {
    let server = common::spawn().await;
    let resp = post(&server, "/puzzle", json!({ "difficulty": "Hard" })).await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("Hard"));
}

#[tokio::test]
async fn test_check_solution() {
    let server = common::spawn().await;
    let resp = post(&server, "/puzzle/check", json!({ "fen": NXE5_FEN, "move": "Nxe5" })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["correct"], true);
    assert_eq!(body["solution"], "Nxe5");

    let resp = post(&server, "/puzzle/check", json!({ "fen": BACK_RANK_FEN, "move": "Kf1" })).await;
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["correct"], false);
    assert!(body.get("solution").is_none());
    assert!(body["hint"].is_string());
}

#[tokio::test]
async fn test_check_solution_errors() {
    let server = common::spawn().await;
    let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let resp = post(&server, "/puzzle/check", json!({ "fen": start, "move": "e4" })).await;
    assert_eq!(resp.status(), 404);

    let resp = post(&server, "/puzzle/check", json!({ "fen": NXE5_FEN, "move": "Qh8" })).await;
    assert_eq!(resp.status(), 400);

    let resp = post(&server, "/puzzle/check", json!({ "fen": NXE5_FEN })).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_chat_replies() {
    let server = common::spawn().await;
    for message in ["Any opening advice?", "hello", "what now"] {
        let resp = post(&server, "/chat", json!({ "message": message, "context": { "fen": "x" } })).await;
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert!(!body["response"].as_str().unwrap().is_empty());
        assert_eq!(body["gamesLearned"], 0);
    }
}

#[tokio::test]
async fn test_chat_requires_message() {
    let server = common::spawn().await;
    let resp = post(&server, "/chat", json!({})).await;
    assert_eq!(resp.status(), 400);
}

// ---------------------------------------------------------------------------
// Stats and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let server = common::spawn().await;
    let resp = common::client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
    assert_eq!(body["difficulty"], "intermediate");
}

#[tokio::test]
async fn test_record_game_stats() {
    let server = common::spawn().await;
    let resp = post(
        &server,
        "/stats/game",
        json!({ "outcome": "win", "accuracy": 95, "difficulty": "beginner" }),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["stats"]["gamesPlayed"], 1);
    assert_eq!(body["stats"]["gamesWon"], 1);
    assert_eq!(body["stats"]["playerElo"], 1202);
    assert_eq!(body["ratingChange"], 2);
    assert_eq!(body["suggestedDifficulty"], "intermediate");
}

#[tokio::test]
async fn test_record_game_requires_outcome() {
    let server = common::spawn().await;
    let resp = post(&server, "/stats/game", json!({ "accuracy": 80 })).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_record_puzzle_stats() {
    let server = common::spawn().await;
    let resp = post(&server, "/stats/puzzle", json!({ "correct": true })).await;
    assert_eq!(resp.status(), 200);
    let stats: Value = resp.json().await.unwrap();
    assert_eq!(stats["puzzlesSolved"], 1);
    assert_eq!(stats["currentStreak"], 1);

    let resp = post(&server, "/stats/puzzle", json!({ "stats": stats, "correct": false })).await;
    let stats: Value = resp.json().await.unwrap();
    assert_eq!(stats["puzzlesSolved"], 1);
    assert_eq!(stats["currentStreak"], 0);
    assert_eq!(stats["bestStreak"], 1);
}

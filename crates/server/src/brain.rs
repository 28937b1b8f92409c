//! The opponent's notebook: games it has been told about, results per move
//! in positions it has seen, and its current difficulty rung.
//!
//! Nothing here feeds back into move selection. The brain is bookkeeping that
//! survives restarts when `BRAIN_PATH` is set.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::Context;
use chess_core::difficulty::Difficulty;
use chess_core::position::{self, parse_color};
use chess_core::session::GameSession;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shakmaty::{Color, Position};

use crate::opponent::Personality;

/// Difficulty is re-evaluated every this many games.
pub const ADJUST_EVERY: u64 = 5;

/// Default cap on distinct positions kept in `position_memory`.
pub const DEFAULT_POSITION_LIMIT: usize = 10_000;

pub type SharedBrain = Arc<BrainStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiResult {
    AiWin,
    PlayerWin,
    Draw,
    Unknown,
}

impl AiResult {
    pub fn parse(s: &str) -> Self {
        match s {
            "ai_win" => AiResult::AiWin,
            "player_win" => AiResult::PlayerWin,
            "draw" => AiResult::Draw,
            _ => AiResult::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    pub game_id: String,
    pub moves: Vec<String>,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

/// A game reported by the client once it is over.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinishedGame {
    #[serde(alias = "game_id")]
    pub game_id: Option<String>,
    pub moves: Vec<String>,
    pub result: Option<String>,
    pub player_color: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Brain {
    pub games_played: u64,
    pub difficulty: Difficulty,
    pub personality: Personality,
    pub history: Vec<GameEntry>,
    /// Normalized FEN -> SAN -> results of games where the opponent played it.
    /// Once `position_limit` positions are known, only those keep updating.
    pub position_memory: HashMap<String, HashMap<String, MoveRecord>>,
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip)]
    history_limit: usize,
    #[serde(skip)]
    position_limit: usize,
}

impl Default for Brain {
    fn default() -> Self {
        Self::new(50)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnSummary {
    pub game_id: String,
    pub games_learned: u64,
    pub current_difficulty: Difficulty,
    pub positions_recorded: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainStats {
    pub games_played: u64,
    pub difficulty: Difficulty,
    pub personality: Personality,
    pub positions_learned: usize,
    pub recent_results: Vec<GameEntry>,
}

impl Brain {
    pub fn new(history_limit: usize) -> Self {
        Self {
            games_played: 0,
            difficulty: Difficulty::default(),
            personality: Personality::default(),
            history: Vec::new(),
            position_memory: HashMap::new(),
            last_updated: None,
            history_limit: history_limit.max(ADJUST_EVERY as usize),
            position_limit: DEFAULT_POSITION_LIMIT,
        }
    }

    pub fn with_position_limit(mut self, limit: usize) -> Self {
        self.position_limit = limit;
        self
    }

    /// Read a brain file, or start fresh when it does not exist yet.
    pub fn load(path: &Path, history_limit: usize) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No brain file yet, starting fresh");
            return Ok(Self::new(history_limit));
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading brain file {}", path.display()))?;
        let mut brain: Brain = serde_json::from_str(&raw)
            .with_context(|| format!("parsing brain file {}", path.display()))?;
        brain.history_limit = history_limit.max(ADJUST_EVERY as usize);
        brain.trim_history();
        tracing::info!(games = brain.games_played, "Brain loaded");
        Ok(brain)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Record a finished game. Moves that fail to replay end the walk through
    /// the game silently; everything before them is still recorded.
    pub fn learn(&mut self, game: &FinishedGame, now: DateTime<Utc>) -> LearnSummary {
        self.games_played += 1;
        let game_id = game
            .game_id
            .clone()
            .unwrap_or_else(|| format!("game_{}", self.games_played));
        let result = game.result.clone().unwrap_or_else(|| "unknown".to_string());

        self.history.push(GameEntry {
            game_id: game_id.clone(),
            moves: game.moves.clone(),
            result: result.clone(),
            timestamp: now,
        });
        self.trim_history();

        let player_color = game
            .player_color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::White);
        let positions_recorded = self.remember_moves(&game.moves, !player_color, AiResult::parse(&result));

        self.adjust_difficulty();
        self.last_updated = Some(now);

        LearnSummary {
            game_id,
            games_learned: self.games_played,
            current_difficulty: self.difficulty,
            positions_recorded,
        }
    }

    fn remember_moves(&mut self, moves: &[String], ai_color: Color, result: AiResult) -> usize {
        let mut session = GameSession::new(!ai_color);
        let mut recorded = 0;
        for san in moves {
            let ai_to_move = session.position().turn() == ai_color;
            let key = position::normalize_fen(&session.fen());
            let played = match session.play_san(san) {
                Ok(played) => played,
                Err(e) => {
                    tracing::debug!("Stopped replaying learned game: {e}");
                    break;
                }
            };
            if !ai_to_move {
                continue;
            }
            if !self.position_memory.contains_key(&key)
                && self.position_memory.len() >= self.position_limit
            {
                tracing::debug!(limit = self.position_limit, "Position memory full, skipping new position");
                continue;
            }
            let record = self
                .position_memory
                .entry(key)
                .or_default()
                .entry(position::strip_check_suffix(&played).to_string())
                .or_default();
            match result {
                AiResult::AiWin => record.wins += 1,
                AiResult::PlayerWin => record.losses += 1,
                AiResult::Draw => record.draws += 1,
                AiResult::Unknown => {}
            }
            recorded += 1;
        }
        recorded
    }

    /// Every fifth game: four or more opponent wins in the last five move up
    /// a rung, none move down.
    fn adjust_difficulty(&mut self) {
        if self.games_played % ADJUST_EVERY != 0 {
            return;
        }
        let recent = self.history.iter().rev().take(ADJUST_EVERY as usize);
        let wins = recent.filter(|g| AiResult::parse(&g.result) == AiResult::AiWin).count();
        let before = self.difficulty;
        if wins >= 4 {
            self.difficulty = self.difficulty.harder();
        } else if wins == 0 {
            self.difficulty = self.difficulty.easier();
        }
        if before != self.difficulty {
            tracing::info!(from = %before, to = %self.difficulty, "Opponent difficulty adjusted");
        }
    }

    fn trim_history(&mut self) {
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
    }

    /// Results recorded for `fen` (move counters ignored).
    pub fn recall(&self, fen: &str) -> Option<&HashMap<String, MoveRecord>> {
        self.position_memory.get(&position::normalize_fen(fen))
    }

    pub fn stats(&self) -> BrainStats {
        let recent_start = self.history.len().saturating_sub(ADJUST_EVERY as usize);
        BrainStats {
            games_played: self.games_played,
            difficulty: self.difficulty,
            personality: self.personality,
            positions_learned: self.position_memory.len(),
            recent_results: self.history[recent_start..].to_vec(),
        }
    }
}

/// The brain shared between requests, plus where (if anywhere) it is saved.
pub struct BrainStore {
    brain: RwLock<Brain>,
    path: Option<PathBuf>,
    save_lock: tokio::sync::Mutex<()>,
}

impl BrainStore {
    pub fn new(brain: Brain, path: Option<PathBuf>) -> Self {
        Self {
            brain: RwLock::new(brain),
            path,
            save_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&Brain) -> T) -> T {
        let guard = self.brain.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut Brain) -> T) -> T {
        let mut guard = self.brain.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Save the current state if a path is configured. Failures are logged only.
    pub async fn save(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        // Snapshot under the save lock so the last writer always holds the newest state
        let _saving = self.save_lock.lock().await;
        let json = match self.read(Brain::to_json) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize brain: {e}");
                return;
            }
        };
        if let Err(e) = persist(path, json).await {
            tracing::warn!(path = %path.display(), "Failed to save brain: {e}");
        }
    }
}

/// Write a serialized brain next to its final path, then move it into place.
pub async fn persist(path: &Path, json: String) -> std::io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await
}

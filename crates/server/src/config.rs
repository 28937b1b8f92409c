use std::env;
use std::path::PathBuf;

use crate::brain::DEFAULT_POSITION_LIMIT;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Where the opponent's game memory is persisted. In-memory only when unset.
    pub brain_path: Option<PathBuf>,
    /// Number of past games kept in the brain's history.
    pub brain_history_limit: usize,
    /// Maximum number of distinct positions the brain remembers.
    pub brain_position_limit: usize,
    /// Front-end files to serve for any unmatched path.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            brain_path: env::var("BRAIN_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            brain_history_limit: env::var("BRAIN_HISTORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            brain_position_limit: env::var("BRAIN_POSITION_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_POSITION_LIMIT),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            brain_path: None,
            brain_history_limit: 50,
            brain_position_limit: DEFAULT_POSITION_LIMIT,
            static_dir: None,
        }
    }
}

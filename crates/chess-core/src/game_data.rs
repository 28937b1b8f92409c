use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameMetadata {
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>, // "1-0", "0-1", "1/2-1/2", "*"
    pub date: Option<String>,
    pub event: Option<String>,
}

/// A finished or imported game as a flat move list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub metadata: GameMetadata,
    pub moves: Vec<String>, // SAN notation
}

impl GameRecord {
    /// Human readable result, the way the front end labels games.
    pub fn result_label(&self) -> Option<&'static str> {
        match self.metadata.result.as_deref()? {
            "1-0" => Some("White wins"),
            "0-1" => Some("Black wins"),
            "1/2-1/2" => Some("Draw"),
            "*" => Some("Ongoing"),
            _ => None,
        }
    }
}

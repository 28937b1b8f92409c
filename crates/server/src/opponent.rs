//! The house opponent. A placeholder: it plays random legal moves, and at
//! intermediate level prefers captures and checks. Advanced and expert have
//! no stronger play of their own and fall through to the beginner behaviour.

use chess_core::difficulty::Difficulty;
use chess_core::position::{self, MoveOption};
use chess_core::ChessError;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shakmaty::Chess;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Balanced,
    Aggressive,
    Defensive,
}

impl Personality {
    /// Unknown names fall back to balanced.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "aggressive" => Personality::Aggressive,
            "defensive" => Personality::Defensive,
            _ => Personality::Balanced,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Personality::Balanced => "balanced",
            Personality::Aggressive => "aggressive",
            Personality::Defensive => "defensive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Any legal move, uniformly.
    Uniform,
    /// Captures and checks first, any legal move when there are none.
    Forcing,
}

/// Only the exact lowercase name "intermediate" plays forcing moves; any other
/// spelling falls through to uniform selection.
pub fn strategy_for(difficulty: Option<&str>) -> Strategy {
    match difficulty {
        Some(name) if name == Difficulty::Intermediate.as_str() => Strategy::Forcing,
        _ => Strategy::Uniform,
    }
}

/// Pick the opponent's reply in `pos`.
pub fn select_move<R: Rng + ?Sized>(
    pos: &Chess,
    difficulty: Option<&str>,
    rng: &mut R,
) -> Result<MoveOption, ChessError> {
    let options = position::move_options(pos);

    let picked = match strategy_for(difficulty) {
        Strategy::Uniform => options.choose(rng),
        Strategy::Forcing => {
            let forcing: Vec<&MoveOption> = options.iter().filter(|o| o.is_forcing()).collect();
            if forcing.is_empty() {
                options.choose(rng)
            } else {
                forcing.choose(rng).copied()
            }
        }
    };

    picked.cloned().ok_or(ChessError::NoLegalMoves)
}

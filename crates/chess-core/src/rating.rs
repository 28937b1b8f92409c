//! Elo bookkeeping for the player against the house opponent.

use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, EloConfig, EloRating};
use skillratings::Outcomes;

pub const DEFAULT_RATING: u32 = 1200;
pub const K_FACTOR: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    /// Outcome for the player given a result label and the player's color.
    /// "Ongoing" and unknown labels yield None.
    pub fn from_result_label(label: &str, player_is_white: bool) -> Option<Self> {
        match label {
            "White wins" if player_is_white => Some(GameOutcome::Win),
            "White wins" => Some(GameOutcome::Loss),
            "Black wins" if player_is_white => Some(GameOutcome::Loss),
            "Black wins" => Some(GameOutcome::Win),
            "Draw" => Some(GameOutcome::Draw),
            _ => None,
        }
    }
}

/// New player rating after a game against `opponent`.
///
/// Only decisive games move the rating. The change is floored to a whole
/// number of points and the result stays within `u32`.
pub fn updated_rating(rating: u32, opponent: u32, outcome: GameOutcome) -> u32 {
    let outcome = match outcome {
        GameOutcome::Win => Outcomes::WIN,
        GameOutcome::Loss => Outcomes::LOSS,
        GameOutcome::Draw => return rating,
    };

    let player = EloRating { rating: f64::from(rating) };
    let house = EloRating { rating: f64::from(opponent) };
    let (new_player, _) = elo(&player, &house, &outcome, &EloConfig { k: K_FACTOR });

    let delta = (new_player.rating - player.rating).floor() as i64;
    (i64::from(rating) + delta).clamp(0, i64::from(u32::MAX)) as u32
}

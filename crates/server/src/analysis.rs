//! Post-game "analysis". There is no engine behind it: accuracy, the quality
//! histogram and per-move verdicts are drawn at random within fixed bounds.

use std::ops::RangeInclusive;

use chess_core::rating::{self, GameOutcome};
use chess_core::session::{GameSession, MoveClass};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

pub const ACCURACY_RANGE: RangeInclusive<u32> = 70..=99;
pub const BRILLIANT_RANGE: RangeInclusive<u32> = 0..=2;
pub const BEST_RANGE: RangeInclusive<u32> = 2..=6;
pub const GOOD_RANGE: RangeInclusive<u32> = 5..=12;
pub const MISTAKE_RANGE: RangeInclusive<u32> = 2..=6;
pub const BLUNDER_RANGE: RangeInclusive<u32> = 0..=2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveHistogram {
    pub brilliant: u32,
    pub best: u32,
    pub good: u32,
    pub mistake: u32,
    pub blunder: u32,
}

impl MoveHistogram {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            brilliant: rng.random_range(BRILLIANT_RANGE),
            best: rng.random_range(BEST_RANGE),
            good: rng.random_range(GOOD_RANGE),
            mistake: rng.random_range(MISTAKE_RANGE),
            blunder: rng.random_range(BLUNDER_RANGE),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveVerdict {
    #[serde(rename = "move")]
    pub san: String,
    #[serde(rename = "type")]
    pub class: MoveClass,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub result: String,
    pub accuracy: u32,
    pub move_classifications: MoveHistogram,
    pub move_analysis: Vec<MoveVerdict>,
    pub plies: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_elo: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_elo: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_player_elo: Option<u32>,
}

/// Fabricate an analysis for a replayed game, tagging each ply of the session.
pub fn fabricate<R: Rng + ?Sized>(session: &mut GameSession, result: &str, rng: &mut R) -> AnalysisResult {
    let accuracy = rng.random_range(ACCURACY_RANGE);
    let histogram = MoveHistogram::random(rng);

    let mut verdicts = Vec::with_capacity(session.ply_count());
    for ply in 0..session.ply_count() {
        let class = *MoveClass::ALL.choose(rng).unwrap_or(&MoveClass::Good);
        session.tag(ply, class);
        verdicts.push(MoveVerdict {
            san: session.moves()[ply].clone(),
            class,
            explanation: format!("This move was classified as {}.", class.as_str()),
        });
    }

    AnalysisResult {
        result: result.to_string(),
        accuracy,
        move_classifications: histogram,
        move_analysis: verdicts,
        plies: session.ply_count(),
        player_elo: None,
        ai_elo: None,
        new_player_elo: None,
    }
}

impl AnalysisResult {
    /// Attach the player's rating change against the house opponent.
    /// Ongoing or unlabelled games keep the rating unchanged.
    pub fn apply_rating(&mut self, player_elo: u32, ai_elo: u32, player_is_white: bool) {
        let new_rating = match GameOutcome::from_result_label(&self.result, player_is_white) {
            Some(outcome) => rating::updated_rating(player_elo, ai_elo, outcome),
            None => player_elo,
        };
        self.player_elo = Some(player_elo);
        self.ai_elo = Some(ai_elo);
        self.new_player_elo = Some(new_rating);
    }
}

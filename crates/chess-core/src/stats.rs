use serde::{Deserialize, Serialize};

use crate::rating::{GameOutcome, DEFAULT_RATING};

/// Per-player counters kept by the client between sessions.
/// Serialized names match the keys the browser stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub games_drawn: u32,
    #[serde(rename = "playerElo")]
    pub rating: u32,
    pub learning_score: u32,
    pub puzzles_solved: u32,
    pub current_streak: u32,
    pub best_streak: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            games_drawn: 0,
            rating: DEFAULT_RATING,
            learning_score: 0,
            puzzles_solved: 0,
            current_streak: 0,
            best_streak: 0,
        }
    }
}

impl PlayerStats {
    /// Count a finished game; accuracy (0-100) feeds the learning score.
    /// Counters come from the client and saturate instead of wrapping.
    pub fn record_game(&mut self, outcome: GameOutcome, accuracy: u32) {
        self.games_played = self.games_played.saturating_add(1);
        let counter = match outcome {
            GameOutcome::Win => &mut self.games_won,
            GameOutcome::Loss => &mut self.games_lost,
            GameOutcome::Draw => &mut self.games_drawn,
        };
        *counter = counter.saturating_add(1);
        self.learning_score = self.learning_score.saturating_add(accuracy.min(100) / 10);
    }

    pub fn apply_rating(&mut self, rating: u32) {
        self.rating = rating;
    }

    pub fn record_puzzle(&mut self, correct: bool) {
        if correct {
            self.puzzles_solved = self.puzzles_solved.saturating_add(1);
            self.current_streak = self.current_streak.saturating_add(1);
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Rounded win percentage, None before the first game.
    pub fn win_rate(&self) -> Option<u32> {
        if self.games_played == 0 {
            return None;
        }
        let rate = f64::from(self.games_won) / f64::from(self.games_played) * 100.0;
        Some(rate.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_games() {
        let mut stats = PlayerStats::default();
        assert_eq!(stats.win_rate(), None);

        stats.record_game(GameOutcome::Win, 87);
        stats.record_game(GameOutcome::Loss, 72);
        stats.record_game(GameOutcome::Draw, 100);

        assert_eq!(stats.games_played, 3);
        assert_eq!((stats.games_won, stats.games_lost, stats.games_drawn), (1, 1, 1));
        assert_eq!(stats.learning_score, 8 + 7 + 10);
        assert_eq!(stats.win_rate(), Some(33));
    }

    #[test]
    fn test_puzzle_streaks() {
        let mut stats = PlayerStats::default();
        stats.record_puzzle(true);
        stats.record_puzzle(true);
        stats.record_puzzle(false);
        stats.record_puzzle(true);

        assert_eq!(stats.puzzles_solved, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 2);
    }

    #[test]
    fn test_counters_saturate_at_max() {
        let mut stats = PlayerStats {
            games_played: u32::MAX,
            games_won: u32::MAX,
            learning_score: u32::MAX,
            puzzles_solved: u32::MAX,
            current_streak: u32::MAX,
            best_streak: u32::MAX,
            ..PlayerStats::default()
        };
        stats.record_game(GameOutcome::Win, 80);
        stats.record_puzzle(true);

        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.games_won, u32::MAX);
        assert_eq!(stats.learning_score, u32::MAX);
        assert_eq!(stats.puzzles_solved, u32::MAX);
        assert_eq!(stats.current_streak, u32::MAX);
        assert_eq!(stats.best_streak, u32::MAX);
    }

    #[test]
    fn test_browser_keys() {
        let stats: PlayerStats =
            serde_json::from_str(r#"{"gamesPlayed": 4, "playerElo": 1350, "bestStreak": 6}"#).unwrap();
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.rating, 1350);
        assert_eq!(stats.best_streak, 6);
        assert_eq!(stats.games_won, 0);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["playerElo"], 1350);
        assert_eq!(json["learningScore"], 0);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The opponent ladder shown in the difficulty selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const LADDER: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Case-insensitive; unknown names yield None.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// One rung up, saturating at expert.
    pub fn harder(self) -> Self {
        Self::LADDER[(self.index() + 1).min(Self::LADDER.len() - 1)]
    }

    /// One rung down, saturating at beginner.
    pub fn easier(self) -> Self {
        Self::LADDER[self.index().saturating_sub(1)]
    }

    /// Nominal rating of the opponent at this level.
    pub fn opponent_rating(self) -> u32 {
        match self {
            Difficulty::Beginner => 800,
            Difficulty::Intermediate => 1200,
            Difficulty::Advanced => 1600,
            Difficulty::Expert => 2000,
        }
    }

    /// Adaptive difficulty after a game: accuracy above 90 moves up a rung,
    /// below 60 moves down, anything else stays.
    pub fn adapt_to_accuracy(self, accuracy: u32) -> Self {
        if accuracy > 90 {
            self.harder()
        } else if accuracy < 60 {
            self.easier()
        } else {
            self
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opponent rating for a free-form difficulty name; unknown names rate as expert.
pub fn opponent_rating_for(name: Option<&str>) -> u32 {
    name.and_then(Difficulty::parse)
        .unwrap_or(Difficulty::Expert)
        .opponent_rating()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_saturates() {
        assert_eq!(Difficulty::Expert.harder(), Difficulty::Expert);
        assert_eq!(Difficulty::Beginner.easier(), Difficulty::Beginner);
        assert_eq!(Difficulty::Intermediate.harder(), Difficulty::Advanced);
        assert_eq!(Difficulty::Advanced.easier(), Difficulty::Intermediate);
    }

    #[test]
    fn test_adapt_to_accuracy() {
        assert_eq!(Difficulty::Beginner.adapt_to_accuracy(95), Difficulty::Intermediate);
        assert_eq!(Difficulty::Advanced.adapt_to_accuracy(50), Difficulty::Intermediate);
        assert_eq!(Difficulty::Advanced.adapt_to_accuracy(90), Difficulty::Advanced);
        assert_eq!(Difficulty::Advanced.adapt_to_accuracy(60), Difficulty::Advanced);
    }

    #[test]
    fn test_default_is_intermediate() {
        assert_eq!(Difficulty::default(), Difficulty::Intermediate);
    }

    #[test]
    fn test_parse_and_ratings() {
        assert_eq!(Difficulty::parse(" Expert "), Some(Difficulty::Expert));
        assert_eq!(Difficulty::parse("grandmaster"), None);
        assert_eq!(opponent_rating_for(Some("beginner")), 800);
        assert_eq!(opponent_rating_for(Some("intermediate")), 1200);
        assert_eq!(opponent_rating_for(Some("whatever")), 2000);
        assert_eq!(opponent_rating_for(None), 2000);
    }
}

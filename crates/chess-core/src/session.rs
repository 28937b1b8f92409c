//! A single game in progress: position, SAN history and per-move tags.
//!
//! Moves, positions and tags are pushed and popped together, so
//! `moves().len()`, `ply_count()` and `tags().len()` always agree.

use serde::{Deserialize, Serialize};
use shakmaty::{Chess, Color, Move, Position};

use crate::error::{ChessError, Result};
use crate::position::{self, PositionStatus};

/// Move quality buckets used by the analysis endpoint and the move-list UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveClass {
    Brilliant,
    Best,
    Good,
    Mistake,
    Blunder,
}

impl MoveClass {
    pub const ALL: [MoveClass; 5] = [
        MoveClass::Brilliant,
        MoveClass::Best,
        MoveClass::Good,
        MoveClass::Mistake,
        MoveClass::Blunder,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoveClass::Brilliant => "brilliant",
            MoveClass::Best => "best",
            MoveClass::Good => "good",
            MoveClass::Mistake => "mistake",
            MoveClass::Blunder => "blunder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    Draw,
    Resigned,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    start: Chess,
    history: Vec<Chess>, // position BEFORE each ply
    position: Chess,
    moves: Vec<String>,
    tags: Vec<Option<MoveClass>>,
    player_color: Color,
    resigned: Option<Color>,
}

impl GameSession {
    pub fn new(player_color: Color) -> Self {
        Self::from_position(Chess::default(), player_color)
    }

    pub fn from_fen(fen: &str, player_color: Color) -> Result<Self> {
        Ok(Self::from_position(position::parse_fen(fen)?, player_color))
    }

    fn from_position(start: Chess, player_color: Color) -> Self {
        Self {
            position: start.clone(),
            start,
            history: Vec::new(),
            moves: Vec::new(),
            tags: Vec::new(),
            player_color,
            resigned: None,
        }
    }

    /// Replay a SAN move list from the standard starting position.
    /// Fails on the first move that does not resolve, naming its ply (1-indexed).
    pub fn replay<S: AsRef<str>>(moves: &[S], player_color: Color) -> Result<Self> {
        let mut session = Self::new(player_color);
        for san in moves {
            session.play_san(san.as_ref())?;
        }
        Ok(session)
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn fen(&self) -> String {
        position::to_fen(&self.position)
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn tags(&self) -> &[Option<MoveClass>] {
        &self.tags
    }

    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn player_color(&self) -> Color {
        self.player_color
    }

    pub fn is_player_turn(&self) -> bool {
        self.position.turn() == self.player_color
    }

    /// Play a SAN move for the side to move.
    pub fn play_san(&mut self, san: &str) -> Result<String> {
        self.ensure_playable()?;
        let mv = position::resolve_san(&self.position, san, self.ply_count() + 1)?;
        Ok(self.push(mv))
    }

    /// Play an already legal move (e.g. one picked by the opponent).
    pub fn play_move(&mut self, mv: Move) -> Result<String> {
        self.ensure_playable()?;
        if !self.position.is_legal(mv.clone()) {
            return Err(ChessError::IllegalMove {
                ply: self.ply_count() + 1,
                san: position::san_of(&self.position, mv),
            });
        }
        Ok(self.push(mv))
    }

    fn ensure_playable(&self) -> Result<()> {
        if self.resigned.is_some() || self.position_status().is_game_over() {
            return Err(ChessError::GameOver);
        }
        Ok(())
    }

    fn push(&mut self, mv: Move) -> String {
        let option = position::describe_move(&self.position, mv.clone());
        self.history.push(self.position.clone());
        self.position.play_unchecked(mv);
        self.moves.push(option.san.clone());
        self.tags.push(None);
        option.san
    }

    /// Take back the last ply.
    pub fn undo(&mut self) -> Result<String> {
        let previous = self.history.pop().ok_or(ChessError::NothingToUndo)?;
        self.position = previous;
        self.tags.pop();
        self.resigned = None;
        self.moves.pop().ok_or(ChessError::NothingToUndo)
    }

    /// Tag a ply (0-indexed). Returns false when the ply does not exist.
    pub fn tag(&mut self, ply: usize, class: MoveClass) -> bool {
        match self.tags.get_mut(ply) {
            Some(slot) => {
                *slot = Some(class);
                true
            }
            None => false,
        }
    }

    pub fn resign(&mut self, color: Color) {
        if self.resigned.is_none() {
            self.resigned = Some(color);
        }
    }

    /// Back to the starting position, keeping the player's color.
    pub fn reset(&mut self) {
        *self = Self::from_position(self.start.clone(), self.player_color);
    }

    fn position_status(&self) -> PositionStatus {
        position::status(&self.position)
    }

    pub fn status(&self) -> SessionStatus {
        if self.resigned.is_some() {
            return SessionStatus::Resigned;
        }
        match self.position_status() {
            PositionStatus::Ongoing => SessionStatus::Ongoing,
            PositionStatus::Check => SessionStatus::Check,
            PositionStatus::Checkmate => SessionStatus::Checkmate,
            PositionStatus::Stalemate => SessionStatus::Stalemate,
            PositionStatus::InsufficientMaterial => SessionStatus::Draw,
        }
    }

    /// Winner of a finished game, `None` for draws and games in progress.
    pub fn winner(&self) -> Option<Color> {
        if let Some(loser) = self.resigned {
            return Some(!loser);
        }
        match self.position_status() {
            PositionStatus::Checkmate => Some(!self.position.turn()),
            _ => None,
        }
    }

    /// "White wins" / "Black wins" / "Draw" / "Ongoing".
    pub fn result_label(&self) -> &'static str {
        match (self.winner(), self.status()) {
            (Some(Color::White), _) => "White wins",
            (Some(Color::Black), _) => "Black wins",
            (None, SessionStatus::Stalemate | SessionStatus::Draw) => "Draw",
            _ => "Ongoing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_fools_mate() {
        let session = GameSession::replay(&["f3", "e5", "g4", "Qh4#"], Color::White).unwrap();
        assert_eq!(session.ply_count(), 4);
        assert_eq!(session.moves().len(), session.ply_count());
        assert_eq!(session.tags().len(), session.ply_count());
        assert_eq!(session.status(), SessionStatus::Checkmate);
        assert_eq!(session.winner(), Some(Color::Black));
        assert_eq!(session.result_label(), "Black wins");
        assert_eq!(session.moves()[3], "Qh4#");
    }

    #[test]
    fn test_stalemate_is_a_draw() {
        // Loyd's ten-move stalemate
        let moves = [
            "e3", "a5", "Qh5", "Ra6", "Qxa5", "h5", "h4", "Rah6", "Qxc7", "f6", "Qxd7+", "Kf7",
            "Qxb7", "Qd3", "Qxb8", "Qh7", "Qxc8", "Kg6", "Qe6",
        ];
        let mut session = GameSession::replay(&moves, Color::White).unwrap();
        assert_eq!(session.status(), SessionStatus::Stalemate);
        assert_eq!(session.winner(), None);
        assert_eq!(session.result_label(), "Draw");
        assert_eq!(session.play_san("Kf5"), Err(ChessError::GameOver));
    }

    #[test]
    fn test_insufficient_material_is_a_draw() {
        let mut session = GameSession::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1", Color::White).unwrap();
        assert_eq!(session.result_label(), "Ongoing");

        session.play_san("Kxe2").unwrap();
        assert_eq!(session.status(), SessionStatus::Draw);
        assert_eq!(session.winner(), None);
        assert_eq!(session.result_label(), "Draw");

        let knight = GameSession::from_fen("4k3/8/8/8/8/8/8/4K1N1 b - - 0 1", Color::White).unwrap();
        assert_eq!(knight.status(), SessionStatus::Draw);
    }

    #[test]
    fn test_replay_reports_illegal_ply() {
        let err = GameSession::replay(&["e4", "e5", "Ke3"], Color::White).unwrap_err();
        assert_eq!(err, ChessError::IllegalMove { ply: 3, san: "Ke3".into() });
    }

    #[test]
    fn test_no_moves_after_mate() {
        let mut session = GameSession::replay(&["f3", "e5", "g4", "Qh4#"], Color::White).unwrap();
        assert_eq!(session.play_san("a3"), Err(ChessError::GameOver));
    }

    #[test]
    fn test_undo_and_reset() {
        let mut session = GameSession::new(Color::Black);
        session.play_san("e4").unwrap();
        session.play_san("c5").unwrap();
        assert!(session.tag(1, MoveClass::Good));
        assert!(!session.tag(5, MoveClass::Good));

        assert_eq!(session.undo().unwrap(), "c5");
        assert_eq!(session.ply_count(), 1);
        assert_eq!(session.tags(), &[None]);
        assert!(session.is_player_turn());

        session.reset();
        assert_eq!(session.ply_count(), 0);
        assert_eq!(session.undo(), Err(ChessError::NothingToUndo));
        assert_eq!(session.player_color(), Color::Black);
    }

    #[test]
    fn test_resign() {
        let mut session = GameSession::new(Color::White);
        session.play_san("d4").unwrap();
        session.resign(Color::White);
        assert_eq!(session.status(), SessionStatus::Resigned);
        assert_eq!(session.result_label(), "Black wins");
        assert_eq!(session.play_san("d5"), Err(ChessError::GameOver));
    }

    #[test]
    fn test_play_move_from_options() {
        let mut session = GameSession::new(Color::White);
        let first = position::move_options(session.position())[0].mv.clone();
        session.play_move(first).unwrap();
        assert_eq!(session.ply_count(), 1);
    }
}

//! Thin helpers over shakmaty: FEN in/out, legal move listing and position status.

use serde::{Deserialize, Serialize};
use shakmaty::{
    fen::Fen,
    san::{San, SanPlus},
    CastlingMode, Chess, Color, EnPassantMode, Move, Position,
};

use crate::error::{ChessError, Result};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A legal move annotated with the flags the opponent stub filters on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOption {
    pub san: String, // with +/# suffix
    pub uci: String,
    pub is_capture: bool,
    pub gives_check: bool,
    #[serde(skip)]
    pub mv: Move,
}

impl MoveOption {
    /// Captures and checks, the "forcing" moves.
    pub fn is_forcing(&self) -> bool {
        self.is_capture || self.gives_check
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
}

impl PositionStatus {
    pub fn is_game_over(self) -> bool {
        matches!(
            self,
            PositionStatus::Checkmate | PositionStatus::Stalemate | PositionStatus::InsufficientMaterial
        )
    }
}

/// Parse a FEN string into a playable position.
pub fn parse_fen(fen: &str) -> Result<Chess> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e: shakmaty::fen::ParseFenError| ChessError::InvalidFen(e.to_string()))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| ChessError::IllegalPosition(e.to_string()))
}

pub fn to_fen(pos: &Chess) -> String {
    Fen::from_position(pos, EnPassantMode::Legal).to_string()
}

/// All legal moves of `pos` with SAN, UCI and capture/check flags.
pub fn move_options(pos: &Chess) -> Vec<MoveOption> {
    pos.legal_moves()
        .iter()
        .map(|m| describe_move(pos, m.clone()))
        .collect()
}

pub fn describe_move(pos: &Chess, mv: Move) -> MoveOption {
    let mut after = pos.clone();
    let san = SanPlus::from_move_and_play_unchecked(&mut after, mv.clone());
    MoveOption {
        san: san.to_string(),
        uci: mv.to_uci(CastlingMode::Standard).to_string(),
        is_capture: mv.is_capture(),
        gives_check: after.is_check(),
        mv,
    }
}

/// Resolve a SAN string (check suffixes allowed) against `pos`.
/// `ply` is only used for the error message.
pub fn resolve_san(pos: &Chess, san: &str, ply: usize) -> Result<Move> {
    let illegal = || ChessError::IllegalMove {
        ply,
        san: san.to_string(),
    };
    let parsed: SanPlus = san.trim().parse().map_err(|_| illegal())?;
    parsed.san.to_move(pos).map_err(|_| illegal())
}

/// SAN of `mv` in `pos`, without check suffix.
pub fn san_of(pos: &Chess, mv: Move) -> String {
    San::from_move(pos, mv).to_string()
}

pub fn status(pos: &Chess) -> PositionStatus {
    if pos.is_checkmate() {
        PositionStatus::Checkmate
    } else if pos.is_stalemate() {
        PositionStatus::Stalemate
    } else if pos.is_insufficient_material() {
        PositionStatus::InsufficientMaterial
    } else if pos.is_check() {
        PositionStatus::Check
    } else {
        PositionStatus::Ongoing
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Accepts "white"/"black" and the FEN letters "w"/"b", any case.
pub fn parse_color(s: &str) -> Option<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Some(Color::White),
        "black" | "b" => Some(Color::Black),
        _ => None,
    }
}

/// Strips move counters from FEN, keeping only position + side + castling + ep.
pub fn normalize_fen(fen: &str) -> String {
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

/// Strip trailing check/mate markers so "Qxf7#" compares equal to "Qxf7".
pub fn strip_check_suffix(san: &str) -> &str {
    san.trim().trim_end_matches(['+', '#'])
}

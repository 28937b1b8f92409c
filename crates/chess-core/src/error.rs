use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("Invalid FEN: {0}")]
    InvalidFen(String),

    #[error("Illegal position: {0}")]
    IllegalPosition(String),

    #[error("Illegal move at ply {ply}: {san}")]
    IllegalMove { ply: usize, san: String },

    #[error("PGN contains no moves")]
    EmptyPgn,

    #[error("PGN starts from a custom position; only games from the standard start are supported")]
    CustomStartPgn,

    #[error("No legal moves")]
    NoLegalMoves,

    #[error("Game is over")]
    GameOver,

    #[error("Nothing to undo")]
    NothingToUndo,
}

pub type Result<T> = std::result::Result<T, ChessError>;

//! Rules-library glue for the chess tutor: positions, sessions, PGN import,
//! evaluation and player rating bookkeeping. All chess rules come from shakmaty.

pub mod difficulty;
pub mod error;
pub mod eval;
pub mod game_data;
pub mod pgn;
pub mod position;
pub mod rating;
pub mod session;
pub mod stats;

pub use error::ChessError;

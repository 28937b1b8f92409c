//! The fixed puzzle set and the random pick over it.

use chess_core::position;
use chess_core::ChessError;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;

/// Difficulty value that disables filtering.
pub const MIXED: &str = "mixed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleRecord {
    pub fen: &'static str,
    pub solution: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub hint: &'static str,
}

impl PuzzleRecord {
    /// Whether a played SAN move is the solution, ignoring check markers.
    pub fn is_solution(&self, san: &str) -> bool {
        position::strip_check_suffix(san) == position::strip_check_suffix(self.solution)
    }
}

pub static PUZZLES: [PuzzleRecord; 3] = [
    PuzzleRecord {
        fen: "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        solution: "Nxe5",
        category: "Tactics",
        difficulty: "Medium",
        hint: "A knight in the centre can hit two targets at once.",
    },
    PuzzleRecord {
        fen: "rnbqkbnr/ppp2ppp/4p3/3p4/3PP3/8/PPP2PPP/RNBQKBNR w KQkq - 0 3",
        solution: "exd5",
        category: "Opening",
        difficulty: "Easy",
        hint: "Resolve the tension in the centre.",
    },
    PuzzleRecord {
        fen: "6k1/5ppp/8/8/8/8/5PPP/6K1 w - - 0 1",
        solution: "h4",
        category: "Endgame",
        difficulty: "Easy",
        hint: "Your king needs an escape square off the back rank.",
    },
];

/// Puzzles matching an exact, case-sensitive difficulty. `None` and "mixed" match all.
pub fn matching(difficulty: Option<&str>) -> Vec<&'static PuzzleRecord> {
    PUZZLES
        .iter()
        .filter(|p| match difficulty {
            None | Some(MIXED) => true,
            Some(wanted) => p.difficulty == wanted,
        })
        .collect()
}

pub fn pick<R: Rng + ?Sized>(difficulty: Option<&str>, rng: &mut R) -> Option<&'static PuzzleRecord> {
    matching(difficulty).choose(rng).copied()
}

/// Look a puzzle up by its position, comparing FENs after normalisation.
pub fn find_by_fen(fen: &str) -> Option<&'static PuzzleRecord> {
    let wanted = position::normalize_fen(fen);
    PUZZLES.iter().find(|p| position::normalize_fen(p.fen) == wanted)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub correct: bool,
    #[serde(rename = "move")]
    pub san: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<&'static str>,
    pub hint: &'static str,
}

/// Check a move against a puzzle. The move must be legal in the puzzle position.
pub fn attempt(puzzle: &'static PuzzleRecord, played: &str) -> Result<Attempt, ChessError> {
    let pos = position::parse_fen(puzzle.fen)?;
    let mv = position::resolve_san(&pos, played, 1)?;
    let san = position::describe_move(&pos, mv).san;
    let correct = puzzle.is_solution(&san);
    Ok(Attempt {
        correct,
        solution: correct.then_some(puzzle.solution),
        san,
        hint: puzzle.hint,
    })
}

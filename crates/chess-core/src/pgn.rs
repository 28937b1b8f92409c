//! Regex-based PGN reader for imported games.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ChessError, Result};
use crate::game_data::{GameMetadata, GameRecord};
use crate::position::{normalize_fen, STARTING_FEN};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).expect("tag pattern"));
static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("header pattern"));
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("comment pattern"));
static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|O-O-O[+#]?|O-O[+#]?")
        .expect("move pattern")
});

/// Parse a PGN string into a GameRecord.
///
/// Only games from the standard starting position are accepted: a `FEN` tag
/// naming any other position is rejected, as is text with no recognisable moves.
pub fn parse_pgn(pgn: &str) -> Result<GameRecord> {
    let mut metadata = GameMetadata::default();
    for cap in TAG_RE.captures_iter(pgn) {
        let value = Some(cap[2].to_string());
        match &cap[1] {
            "FEN" if normalize_fen(&cap[2]) != normalize_fen(STARTING_FEN) => {
                return Err(ChessError::CustomStartPgn)
            }
            "White" => metadata.white = value,
            "Black" => metadata.black = value,
            "Result" => metadata.result = value,
            "Date" => metadata.date = value,
            "Event" => metadata.event = value,
            _ => {}
        }
    }

    let moves = extract_moves(pgn);
    if moves.is_empty() {
        return Err(ChessError::EmptyPgn);
    }

    // Movetext may end with a result token even without a header
    if metadata.result.is_none() {
        metadata.result = trailing_result(pgn);
    }

    Ok(GameRecord { metadata, moves })
}

/// Extract SAN moves from PGN text (after removing headers, comments, variations).
pub fn extract_moves(pgn: &str) -> Vec<String> {
    let no_headers = HEADER_RE.replace_all(pgn, "");
    let no_comments = COMMENT_RE.replace_all(&no_headers, "");
    let no_variations = strip_variations(&no_comments);

    MOVE_RE
        .find_iter(&no_variations)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Drop parenthesised variations, nested ones included.
fn strip_variations(movetext: &str) -> String {
    let mut depth = 0usize;
    movetext
        .chars()
        .filter(|&c| match c {
            '(' => {
                depth += 1;
                false
            }
            ')' => {
                depth = depth.saturating_sub(1);
                false
            }
            _ => depth == 0,
        })
        .collect()
}

fn trailing_result(pgn: &str) -> Option<String> {
    let last = pgn.split_whitespace().last()?;
    match last {
        "1-0" | "0-1" | "1/2-1/2" | "*" => Some(last.to_string()),
        _ => None,
    }
}

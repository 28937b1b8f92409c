//! Crude static evaluation: material plus a mobility nudge.
//! Positive favours White. Reported alongside opponent moves, never used to pick them.

use shakmaty::{Chess, Color, Position, Role};

fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 0,
    }
}

/// Material balance from White's point of view.
pub fn material_balance(pos: &Chess) -> i32 {
    let b = pos.board();
    let mut balance = 0i32;
    for sq in b.occupied() {
        if let Some(piece) = b.piece_at(sq) {
            let val = piece_value(piece.role);
            if piece.color == Color::White {
                balance += val;
            } else {
                balance -= val;
            }
        }
    }
    balance
}

/// Material, then 0.1 per legal move and -0.5 for being in check,
/// both credited to the side to move.
pub fn evaluate(pos: &Chess) -> f64 {
    let mut score = f64::from(material_balance(pos));
    let mobility = pos.legal_moves().len() as f64 * 0.1;
    let check_penalty = if pos.is_check() { 0.5 } else { 0.0 };

    match pos.turn() {
        Color::White => score += mobility - check_penalty,
        Color::Black => score -= mobility - check_penalty,
    }
    // One decimal is all the precision this deserves
    (score * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{parse_fen, STARTING_FEN};

    #[test]
    fn test_starting_position_material_is_even() {
        let pos = parse_fen(STARTING_FEN).unwrap();
        assert_eq!(material_balance(&pos), 0);
        // 20 legal moves for White
        assert_eq!(evaluate(&pos), 2.0);
    }

    #[test]
    fn test_extra_queen_for_black() {
        let pos = parse_fen("4k3/8/8/8/8/8/3q4/7K w - - 0 1").unwrap();
        assert_eq!(material_balance(&pos), -9);
        assert!(evaluate(&pos) < -8.0);
    }
}

//! Square and move conversions for console coordinates.
//!
//! Files A-H map to columns 0-7; ranks 1-8 map to rows 7-0, so White's back
//! rank is row 7. Input is case-insensitive.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Move, Square};

/// Convert a coordinate such as `"E2"` or `"e2"` to a square.
pub fn parse_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];
    if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let col = file - b'A';
    let row = BOARD_SIZE as u8 - (rank - b'0');
    Ok(Square::new(row, col))
}

/// Parse a move typed as `"A2 A3"`, `"a2a3"` or `"a2-a3"`.
pub fn parse_move(text: &str) -> Result<Move, ChessErrors> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = parse_square(&compact[0..2])
        .map_err(|_| ChessErrors::InvalidAlgebraicString(text.to_owned()))?;
    let to = parse_square(&compact[2..4])
        .map_err(|_| ChessErrors::InvalidAlgebraicString(text.to_owned()))?;
    Ok(Move::new(from, to))
}

//! Legality gate shared by `try_move` and move enumeration.

use crate::chess_errors::{ChessErrors, IllegalMoveReason};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::piece_rules::piece_geometry;

/// Reason a move would be refused, or `None` when it passes the gate.
///
/// Checks run in order: source occupancy, mover ownership, friendly capture,
/// then piece geometry.
pub fn move_rejection(
    board: &Board,
    side: Color,
    from: Square,
    to: Square,
) -> Option<IllegalMoveReason> {
    let Some(piece) = board.piece_at(from) else {
        return Some(IllegalMoveReason::EmptySource);
    };
    if piece.color != side {
        return Some(IllegalMoveReason::WrongSide);
    }
    if board.piece_at(to).is_some_and(|target| target.color == side) {
        return Some(IllegalMoveReason::FriendlyCapture);
    }
    if !piece_geometry(piece, from, to, board) {
        return Some(IllegalMoveReason::InvalidGeometry);
    }
    None
}

#[inline]
pub fn is_legal_move(board: &Board, side: Color, from: Square, to: Square) -> bool {
    move_rejection(board, side, from, to).is_none()
}

/// `move_rejection` as an `IllegalMove` error.
pub fn check_move(
    board: &Board,
    side: Color,
    from: Square,
    to: Square,
) -> Result<(), ChessErrors> {
    match move_rejection(board, side, from, to) {
        Some(reason) => Err(ChessErrors::IllegalMove {
            mv: Move::new(from, to),
            reason,
        }),
        None => Ok(()),
    }
}

//! Move application and exact undo.
//!
//! `apply_move` relocates a piece and returns an `UndoState` holding the
//! prior occupants of both squares; `undo_move` consumes it to restore the
//! board bit-for-bit. Search relies on strict apply/undo stack discipline.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::check_move;

/// Relocate the piece on `mv.from` to `mv.to` without rule checks.
///
/// Whatever stood on the destination is dropped from the board and recorded
/// in the returned undo record.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<UndoState, ChessErrors> {
    let moved_piece = board
        .clear(mv.from)
        .ok_or(ChessErrors::EmptySquare(mv.from))?;
    let captured_piece = board.place(mv.to, moved_piece);

    Ok(UndoState {
        mv,
        moved_piece,
        captured_piece,
    })
}

/// Restore both squares touched by `undo.mv`.
#[inline]
pub fn undo_move(board: &mut Board, undo: &UndoState) {
    board.set(undo.mv.to, undo.captured_piece);
    board.set(undo.mv.from, Some(undo.moved_piece));
}

/// Validate and apply a move for `side`; the board is untouched on error.
pub fn try_move_checked(
    board: &mut Board,
    side: Color,
    from: Square,
    to: Square,
) -> Result<UndoState, ChessErrors> {
    check_move(board, side, from, to)?;
    apply_move(board, Move::new(from, to))
}

/// Boolean form of the move gate: mutates `board` only when it returns true.
#[inline]
pub fn try_move(board: &mut Board, side: Color, from: Square, to: Square) -> bool {
    try_move_checked(board, side, from, to).is_ok()
}

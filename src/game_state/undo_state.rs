use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
///
/// Holds the prior occupants of both touched squares so the board can be
/// restored exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
}

impl UndoState {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

use crate::game_state::chess_types::Square;

/// One step in any of the eight directions. No check-safety filtering.
#[inline]
pub fn king_move_is_legal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs() <= 1 && d_col.abs() <= 1 && from != to
}

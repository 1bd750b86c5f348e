use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::ray_walk::path_is_clear;

/// Equal row and column displacement with every square strictly between the
/// endpoints empty.
#[inline]
pub fn bishop_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs() == d_col.abs() && path_is_clear(from, to, board)
}

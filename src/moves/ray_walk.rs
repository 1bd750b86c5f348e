//! Straight-line path helpers shared by the sliding pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

/// Squares strictly between `from` and `to` along a rank, file or diagonal,
/// exclusive of both endpoints.
///
/// Yields nothing when the two squares are not aligned.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = from.delta_to(to);
    let aligned = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    let steps = if aligned && from != to {
        d_row.abs().max(d_col.abs()) - 1
    } else {
        0
    };
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    (1..=steps).filter_map(move |i| from.offset(step_row * i, step_col * i))
}

/// True when every square strictly between the endpoints is empty.
#[inline]
pub fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    squares_between(from, to).all(|sq| !board.is_occupied(sq))
}

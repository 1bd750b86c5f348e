use crate::game_state::chess_types::Square;

/// L-shaped jump; intervening squares are irrelevant.
#[inline]
pub fn knight_move_is_legal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    matches!((d_row.abs(), d_col.abs()), (1, 2) | (2, 1))
}

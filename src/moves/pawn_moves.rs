use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Single forward step onto an empty square, or a forward diagonal step onto
/// any occupied square.
///
/// The diagonal case checks occupancy only, not the occupant's side; the move
/// engine's friendly-capture gate filters same-side targets. There is no
/// double step, en passant or promotion.
pub fn pawn_move_is_legal(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    if d_row != color.pawn_direction() {
        return false;
    }

    match d_col.abs() {
        0 => !board.is_occupied(to),
        1 => board.is_occupied(to),
        _ => false,
    }
}

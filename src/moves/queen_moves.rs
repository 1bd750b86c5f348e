use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

#[inline]
pub fn queen_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    rook_move_is_legal(from, to, board) || bishop_move_is_legal(from, to, board)
}

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::ray_walk::path_is_clear;

/// Same row or same column with nothing strictly in between.
#[inline]
pub fn rook_move_is_legal(from: Square, to: Square, board: &Board) -> bool {
    (from.row == to.row || from.col == to.col) && path_is_clear(from, to, board)
}

#[cfg(test)]
mod tests {
    use super::rook_move_is_legal;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_a1_is_blocked_by_piece_on_the_file() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        board.place(a1, Piece::new(Color::White, PieceKind::Rook));
        board.place(Square::new(4, 0), Piece::new(Color::Black, PieceKind::Pawn));
        assert!(!rook_move_is_legal(a1, Square::new(0, 0), &board));
        assert!(rook_move_is_legal(a1, Square::new(4, 0), &board));
    }

    #[test]
    fn rook_slides_along_an_empty_rank_and_file() {
        let board = Board::empty();
        let a1 = Square::new(7, 0);
        assert!(rook_move_is_legal(a1, Square::new(0, 0), &board));
        assert!(rook_move_is_legal(a1, Square::new(7, 7), &board));
    }

    #[test]
    fn rook_cannot_move_diagonally() {
        let board = Board::empty();
        assert!(!rook_move_is_legal(Square::new(7, 0), Square::new(6, 1), &board));
    }
}

//! Move-path enumeration (perft) over apply/undo.
//!
//! Counts leaf nodes of the legal-move tree. Used to sanity-check the move
//! engine and as a benchmark workload.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub king_captures: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
    }
}

/// Perft from `board` with `side` to move. The board is restored on return.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    board: &mut Board,
    side: Color,
    depth: u8,
) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(board, side) {
        let undo = apply_move(board, mv)?;
        let child = if depth == 1 {
            Ok(leaf_counts(&undo))
        } else {
            perft(generator, board, side.opposite(), depth - 1)
        };
        undo_move(board, &undo);
        total.merge(child?);
    }

    Ok(total)
}

fn leaf_counts(undo: &UndoState) -> PerftCounts {
    let king_taken = undo
        .captured_piece
        .is_some_and(|piece| piece.kind == PieceKind::King);
    PerftCounts {
        nodes: 1,
        captures: u64::from(undo.is_capture()),
        king_captures: u64::from(king_taken),
    }
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    #[test]
    fn start_position_perft_counts() {
        let mut board = Board::initial();
        let original = board;

        let depth_1 = perft(&LegalMoveGenerator, &mut board, Color::White, 1)
            .expect("perft should run");
        assert_eq!(depth_1.nodes, 12);
        assert_eq!(depth_1.captures, 0);

        let depth_2 = perft(&LegalMoveGenerator, &mut board, Color::White, 2)
            .expect("perft should run");
        assert_eq!(depth_2.nodes, 144);

        assert_eq!(board, original);
    }

    #[test]
    fn perft_counts_king_captures_at_the_leaves() {
        let mut board = Board::empty();
        board.place(Square::new(0, 0), Piece::new(Color::Black, PieceKind::King));
        board.place(Square::new(7, 0), Piece::new(Color::White, PieceKind::Rook));

        let counts = perft(&LegalMoveGenerator, &mut board, Color::White, 1)
            .expect("perft should run");
        // Rook: six squares up the file, the king, and seven along the rank.
        assert_eq!(counts.nodes, 14);
        assert_eq!(counts.captures, 1);
        assert_eq!(counts.king_captures, 1);
    }
}

//! Static board evaluation.
//!
//! Scores are from Black's point of view: positive favors Black, negative
//! favors White. The computer side is Black by default, so search maximizes
//! for Black and minimizes for White.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score with positive values favoring Black.
    fn score(&self, board: &Board) -> i32;
}

/// Plain material count. No positional, mobility or king-safety terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    #[inline]
    pub const fn signed_value(piece: Piece) -> i32 {
        match piece.color {
            Color::Black => Self::piece_value(piece.kind),
            Color::White => -Self::piece_value(piece.kind),
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .occupied_squares()
            .map(|(_, piece)| Self::signed_value(piece))
            .sum()
    }
}

/// Material evaluation, positive favors Black.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    MaterialScorer.score(board)
}

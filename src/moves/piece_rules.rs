//! Per-kind move geometry dispatch.
//!
//! `legal_geometry` answers "can this piece kind travel from `from` to `to`
//! on this board", ignoring whose turn it is, who owns the destination and
//! king safety. Those concerns belong to the move engine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::king_moves::king_move_is_legal;
use crate::moves::knight_moves::knight_move_is_legal;
use crate::moves::pawn_moves::pawn_move_is_legal;
use crate::moves::queen_moves::queen_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

/// Pure geometry check for a piece of `kind` owned by `color`.
///
/// A null move (`from == to`) is never legal. Only the pawn's direction
/// depends on `color`.
pub fn legal_geometry(
    color: Color,
    kind: PieceKind,
    from: Square,
    to: Square,
    board: &Board,
) -> bool {
    if from == to {
        return false;
    }

    match kind {
        PieceKind::Pawn => pawn_move_is_legal(color, from, to, board),
        PieceKind::Knight => knight_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(from, to, board),
        PieceKind::Rook => rook_move_is_legal(from, to, board),
        PieceKind::Queen => queen_move_is_legal(from, to, board),
        PieceKind::King => king_move_is_legal(from, to),
    }
}

#[inline]
pub fn piece_geometry(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    legal_geometry(piece.color, piece.kind, from, to, board)
}

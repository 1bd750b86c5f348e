//! Exhaustive legal move enumeration.
//!
//! Scans every square owned by the side in row-major order and, for each,
//! every destination in row-major order, keeping moves that pass the same
//! gate as `try_move`. The order is what makes search tie-breaking
//! deterministic.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<Move> {
        legal_moves(board, side)
    }
}

pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    for (from, _) in board.pieces_of(side) {
        for to in Square::all() {
            if is_legal_move(board, side, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
    out
}

/// Legal moves whose destination is occupied (necessarily by the opponent).
pub fn capture_moves(board: &Board, side: Color) -> Vec<Move> {
    legal_moves(board, side)
        .into_iter()
        .filter(|mv| board.is_occupied(mv.to))
        .collect()
}

//! Move enumeration interface.
//!
//! Search and engines are generic over `MoveGenerator` so alternative
//! orderings can be plugged in without touching search code.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};

pub trait MoveGenerator: Send + Sync {
    /// Every move of `side` that passes the legality gate, in a stable order.
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<Move>;
}

//! Crate root module declarations for the Duel Chess engine.
//!
//! A compact two-player engine: mailbox board model, per-piece move
//! geometry, a move engine with exact undo, material evaluation and a
//! fixed-depth minimax search, plus the console front-end that drives them.

pub mod chess_errors;
pub mod cli;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_rules;
    pub mod queen_moves;
    pub mod ray_walk;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random_capture;
    pub mod engine_select;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_log;
    pub mod render_game_state;
    pub mod turn_controller;
}

pub use chess_errors::{ChessErrors, IllegalMoveReason};
pub use game_state::board::{setup_initial_board, Board};
pub use game_state::chess_types::{Color, Move, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use game_state::undo_state::UndoState;
pub use move_generation::legal_move_apply::{apply_move, try_move, try_move_checked, undo_move};
pub use move_generation::legal_move_generator::legal_moves;
pub use moves::piece_rules::legal_geometry;
pub use search::board_scoring::evaluate;
pub use search::minimax::best_move;

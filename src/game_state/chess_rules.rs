//! Canonical rule constants.
//!
//! Board dimensions, the starting layout and the default search depth used
//! when nothing else is configured.

use crate::game_state::chess_types::PieceKind;

pub const BOARD_SIZE: usize = 8;

/// Back-rank layout from file A to file H, shared by both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_BACK_ROW: u8 = 0;
pub const BLACK_PAWN_ROW: u8 = 1;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const WHITE_BACK_ROW: u8 = 7;

/// One computer move plus one reply.
pub const DEFAULT_SEARCH_DEPTH: u8 = 2;

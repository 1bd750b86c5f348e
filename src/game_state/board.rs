//! 8x8 mailbox board.
//!
//! Pure data: each square holds at most one `Piece`. Nothing enforces a king
//! per side, so a captured king simply disappears and the game-level
//! termination check observes its absence.

use crate::game_state::chess_rules::{
    BACK_RANK_LAYOUT, BLACK_BACK_ROW, BLACK_PAWN_ROW, BOARD_SIZE, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    // [row][col]
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as u8;
            board.place(Square::new(BLACK_BACK_ROW, col), Piece::new(Color::Black, *kind));
            board.place(
                Square::new(BLACK_PAWN_ROW, col),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
            board.place(
                Square::new(WHITE_PAWN_ROW, col),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            board.place(Square::new(WHITE_BACK_ROW, col), Piece::new(Color::White, *kind));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Overwrite a square and hand back whatever was there.
    #[inline]
    pub fn set(&mut self, square: Square, occupant: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.row as usize][square.col as usize],
            occupant,
        )
    }

    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.set(square, Some(piece))
    }

    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.set(square, None)
    }

    /// Occupied squares in row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_squares()
            .filter(move |(_, piece)| piece.color == color)
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(_, piece)| piece.kind == PieceKind::King)
    }
}

/// Board at the start of a game.
#[inline]
pub fn setup_initial_board() -> Board {
    Board::initial()
}

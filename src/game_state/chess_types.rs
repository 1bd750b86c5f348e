//! Core value types shared by every subsystem: sides, piece kinds, pieces,
//! squares and moves.
//!
//! Squares use `(row, col)` addressing: row 0 is Black's back rank, row 7 is
//! White's, and column 0 is file A.

use std::fmt;

use crate::game_state::chess_rules::BOARD_SIZE;

/// Side owning a piece, or side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step: White moves toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Piece kind (color is stored separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece never changes side or kind once created; moves relocate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.kind.letter())
    }
}

/// Board coordinate, both components in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Out-of-range coordinates are a caller bug.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    #[inline]
    pub const fn is_valid(row: i8, col: i8) -> bool {
        row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
    }

    /// Shift by a signed delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if Square::is_valid(row, col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Signed `(d_row, d_col)` from `self` to `to`.
    #[inline]
    pub fn delta_to(self, to: Square) -> (i8, i8) {
        (
            to.row as i8 - self.row as i8,
            to.col as i8 - self.col as i8,
        )
    }

    /// Every square in row-major order, starting at A8 (row 0, col 0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'A' + self.col);
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{file}{rank}")
    }
}

/// A (source, destination) pair. Legality is always relative to a board and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_display_maps_row_seven_to_rank_one() {
        assert_eq!(Square::new(7, 0).to_string(), "A1");
        assert_eq!(Square::new(0, 7).to_string(), "H8");
        assert_eq!(Square::new(6, 4).to_string(), "E2");
    }

    #[test]
    fn square_iteration_is_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[1], Square::new(0, 1));
        assert_eq!(squares[8], Square::new(1, 0));
        assert_eq!(squares[63], Square::new(7, 7));
    }

    #[test]
    fn offset_rejects_squares_off_the_board() {
        let a1 = Square::new(7, 0);
        assert_eq!(a1.offset(-1, 0), Some(Square::new(6, 0)));
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
    }

    #[test]
    fn pieces_render_as_side_and_kind_letters() {
        assert_eq!(Piece::new(Color::White, PieceKind::Pawn).to_string(), "WP");
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).to_string(), "BN");
    }

    #[test]
    fn pawn_direction_depends_on_side() {
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}

//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type shared by the board model, move
//! engine, search, engines and the text front-end. Variants carry the
//! offending move, square or token so callers can report precise diagnostics.
//!
//! Usage guidelines:
//! - `IllegalMove` and the parsing variants are recoverable; the turn
//!   controller re-prompts the player.
//! - `NoMoveAvailable` is terminal for the side named in its payload.
//! - `Io` wraps failures of the console streams and is propagated to `main`.

use std::error::Error;
use std::fmt;
use std::io;

use crate::game_state::chess_types::{Color, Move, Square};

/// Why the move engine refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// There is no piece on the source square.
    EmptySource,
    /// The piece on the source square belongs to the other side.
    WrongSide,
    /// The destination holds a piece of the moving side.
    FriendlyCapture,
    /// The piece kind cannot travel from source to destination on this board.
    InvalidGeometry,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::EmptySource => "source square is empty",
            IllegalMoveReason::WrongSide => "piece belongs to the other side",
            IllegalMoveReason::FriendlyCapture => "destination holds a friendly piece",
            IllegalMoveReason::InvalidGeometry => "piece cannot move that way",
        };
        f.write_str(text)
    }
}

/// Unified error type for the chess engine.
#[derive(Debug)]
pub enum ChessErrors {
    /// The move engine rejected `mv`.
    IllegalMove {
        mv: Move,
        reason: IllegalMoveReason,
    },

    /// The given side has no legal move at all.
    NoMoveAvailable(Color),

    /// A move was applied from a square with no occupant.
    EmptySquare(Square),

    /// A square or move string could not be parsed.
    ///
    /// Payload: the original input.
    InvalidAlgebraicString(String),

    /// `Engine::set_option` was called with a name the engine does not know.
    UnknownOption(String),

    /// `Engine::set_option` was called with a value that does not parse.
    InvalidOptionValue { name: String, value: String },

    /// Reading from or writing to the console failed.
    Io(io::Error),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::IllegalMove { mv, reason } => write!(f, "illegal move {mv}: {reason}"),
            ChessErrors::NoMoveAvailable(color) => write!(f, "no move available for {color}"),
            ChessErrors::EmptySquare(square) => write!(f, "no piece on {square}"),
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid square or move notation: '{text}'")
            }
            ChessErrors::UnknownOption(name) => write!(f, "unknown engine option '{name}'"),
            ChessErrors::InvalidOptionValue { name, value } => {
                write!(f, "invalid value '{value}' for engine option '{name}'")
            }
            ChessErrors::Io(err) => write!(f, "console i/o failed: {err}"),
        }
    }
}

impl Error for ChessErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessErrors::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ChessErrors {
    fn from(err: io::Error) -> Self {
        ChessErrors::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChessErrors, IllegalMoveReason};
    use crate::game_state::chess_types::{Color, Move, Square};

    #[test]
    fn illegal_move_message_names_square_pair_and_reason() {
        let err = ChessErrors::IllegalMove {
            mv: Move::new(Square::new(6, 0), Square::new(4, 0)),
            reason: IllegalMoveReason::InvalidGeometry,
        };
        assert_eq!(
            err.to_string(),
            "illegal move A2 A4: piece cannot move that way"
        );
    }

    #[test]
    fn no_move_available_names_the_side() {
        assert_eq!(
            ChessErrors::NoMoveAvailable(Color::Black).to_string(),
            "no move available for Black"
        );
    }

    #[test]
    fn io_errors_expose_their_source() {
        use std::error::Error;
        let err = ChessErrors::from(std::io::Error::other("pipe closed"));
        assert!(err.source().is_some());
    }
}

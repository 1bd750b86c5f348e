//! Game-level state owned by the turn controller.
//!
//! `GameState` threads the board and side to move through every core call.
//! Nothing in the crate keeps a process-wide board.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::try_move_checked;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub ply: u16,
    pub move_history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard start position, White to move.
    pub fn new_game() -> Self {
        Self::from_board(Board::initial(), Color::White)
    }

    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            ply: 0,
            move_history: Vec::new(),
        }
    }

    /// Validate and play a move for the side to move, then pass the turn.
    ///
    /// On error the state is unchanged.
    pub fn play(&mut self, mv: Move) -> Result<UndoState, ChessErrors> {
        let undo = try_move_checked(&mut self.board, self.side_to_move, mv.from, mv.to)?;
        self.move_history.push(mv);
        self.ply = self.ply.saturating_add(1);
        self.side_to_move = self.side_to_move.opposite();
        Ok(undo)
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.side_to_move)
    }

    /// King-capture termination: the side whose king is still on the board
    /// wins once the other king is gone.
    pub fn winner(&self) -> Option<Color> {
        match (
            self.board.has_king(Color::White),
            self.board.has_king(Color::Black),
        ) {
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::{ChessErrors, IllegalMoveReason};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn play_passes_the_turn_and_records_history() {
        let mut game = GameState::new_game();
        let mv = Move::new(Square::new(6, 0), Square::new(5, 0));
        game.play(mv).expect("A2 A3 should be legal");

        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.ply, 1);
        assert_eq!(game.move_history, vec![mv]);
    }

    #[test]
    fn rejected_move_keeps_turn_and_board() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let err = game
            .play(Move::new(Square::new(1, 0), Square::new(2, 0)))
            .expect_err("White cannot move a Black pawn");

        assert!(matches!(
            err,
            ChessErrors::IllegalMove {
                reason: IllegalMoveReason::WrongSide,
                ..
            }
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn capturing_the_king_ends_the_game() {
        let mut board = Board::empty();
        board.place(Square::new(7, 4), Piece::new(Color::White, PieceKind::King));
        board.place(Square::new(0, 4), Piece::new(Color::Black, PieceKind::King));
        board.place(Square::new(1, 4), Piece::new(Color::White, PieceKind::Queen));
        let mut game = GameState::from_board(board, Color::White);
        assert_eq!(game.winner(), None);

        game.play(Move::new(Square::new(1, 4), Square::new(0, 4)))
            .expect("queen takes king");
        assert_eq!(game.winner(), Some(Color::White));
    }

    #[test]
    fn start_position_offers_twelve_moves() {
        assert_eq!(GameState::new_game().legal_moves().len(), 12);
    }
}

//! Fixed-depth minimax search over the move engine.
//!
//! Scores come from a `BoardScorer` (positive favors Black), so Black nodes
//! maximize and White nodes minimize. Every candidate is applied on the
//! caller's board and undone before the next sibling, which leaves the board
//! exactly as it was when the search returns.
//!
//! Optional alpha-beta pruning is a pure speed-up: root children are always
//! searched with a full window, so the chosen move and its score match plain
//! minimax.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched, counting the root move. Depths 0 and 1 both score the
    /// position right after the root move.
    pub depth: u8,
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            alpha_beta: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub best_score: i32,
    pub nodes: u64,
}

#[inline]
const fn is_maximizing(side: Color) -> bool {
    matches!(side, Color::Black)
}

/// Best move for `side` with the default generator and material scorer.
pub fn best_move(board: &mut Board, side: Color, depth: u8) -> Result<Move, ChessErrors> {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    search_best_move(board, side, &LegalMoveGenerator, &MaterialScorer, config)
        .map(|result| result.best_move)
}

/// Search every legal root move of `side` and keep the first one reaching
/// the extremal score.
///
/// Returns `NoMoveAvailable` when `side` has no legal move.
pub fn search_best_move<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    side: Color,
    generator: &G,
    scorer: &S,
    config: SearchConfig,
) -> Result<SearchResult, ChessErrors> {
    let root_moves = generator.generate_legal_moves(board, side);
    let child_depth = config.depth.saturating_sub(1);
    let maximizing = is_maximizing(side);

    let mut nodes = 0u64;
    let mut best: Option<(Move, i32)> = None;

    for mv in root_moves {
        let undo = apply_move(board, mv)?;
        let score = if config.alpha_beta {
            alpha_beta(
                board,
                side.opposite(),
                child_depth,
                i32::MIN,
                i32::MAX,
                generator,
                scorer,
                &mut nodes,
            )
        } else {
            minimax(board, side.opposite(), child_depth, generator, scorer, &mut nodes)
        };
        undo_move(board, &undo);
        let score = score?;

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let (best_move, best_score) = best.ok_or(ChessErrors::NoMoveAvailable(side))?;
    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

/// Plain minimax value of `board` with `side` to move.
///
/// A node without legal moves is scored statically, like a leaf.
pub fn minimax<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    side: Color,
    depth: u8,
    generator: &G,
    scorer: &S,
    nodes: &mut u64,
) -> Result<i32, ChessErrors> {
    *nodes += 1;
    if depth == 0 {
        return Ok(scorer.score(board));
    }

    let moves = generator.generate_legal_moves(board, side);
    if moves.is_empty() {
        return Ok(scorer.score(board));
    }

    let maximizing = is_maximizing(side);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let undo = apply_move(board, mv)?;
        let value = minimax(board, side.opposite(), depth - 1, generator, scorer, nodes);
        undo_move(board, &undo);
        let value = value?;

        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    Ok(best)
}

/// Minimax with alpha-beta cutoffs. Exact when called with a full window.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<G: MoveGenerator, S: BoardScorer>(
    board: &mut Board,
    side: Color,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    generator: &G,
    scorer: &S,
    nodes: &mut u64,
) -> Result<i32, ChessErrors> {
    *nodes += 1;
    if depth == 0 {
        return Ok(scorer.score(board));
    }

    let moves = generator.generate_legal_moves(board, side);
    if moves.is_empty() {
        return Ok(scorer.score(board));
    }

    if is_maximizing(side) {
        let mut value = i32::MIN;
        for mv in moves {
            let undo = apply_move(board, mv)?;
            let child = alpha_beta(
                board,
                side.opposite(),
                depth - 1,
                alpha,
                beta,
                generator,
                scorer,
                nodes,
            );
            undo_move(board, &undo);
            value = value.max(child?);
            alpha = alpha.max(value);
            // Beta cutoff
            if alpha >= beta {
                break;
            }
        }
        Ok(value)
    } else {
        let mut value = i32::MAX;
        for mv in moves {
            let undo = apply_move(board, mv)?;
            let child = alpha_beta(
                board,
                side.opposite(),
                depth - 1,
                alpha,
                beta,
                generator,
                scorer,
                nodes,
            );
            undo_move(board, &undo);
            value = value.min(child?);
            beta = beta.min(value);
            // Alpha cutoff
            if beta <= alpha {
                break;
            }
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{best_move, search_best_move, SearchConfig};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::MaterialScorer;

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    /// Black queen on D5 can take an undefended pawn on C4 or a rook on G5
    /// that a pawn on H4 defends.
    fn defended_rook_position() -> Board {
        let mut board = Board::empty();
        board.place(Square::new(0, 4), piece(Color::Black, PieceKind::King));
        board.place(Square::new(3, 3), piece(Color::Black, PieceKind::Queen));
        board.place(Square::new(7, 4), piece(Color::White, PieceKind::King));
        board.place(Square::new(3, 6), piece(Color::White, PieceKind::Rook));
        board.place(Square::new(4, 7), piece(Color::White, PieceKind::Pawn));
        board.place(Square::new(4, 2), piece(Color::White, PieceKind::Pawn));
        board
    }

    #[test]
    fn depth_zero_takes_the_largest_immediate_capture() {
        let mut board = defended_rook_position();
        let mv = best_move(&mut board, Color::Black, 0).expect("Black has moves");
        assert_eq!(mv, Move::new(Square::new(3, 3), Square::new(3, 6)));
    }

    #[test]
    fn depth_two_sees_the_recapture() {
        let mut board = defended_rook_position();
        let result = search_best_move(
            &mut board,
            Color::Black,
            &LegalMoveGenerator,
            &MaterialScorer,
            SearchConfig::default(),
        )
        .expect("Black has moves");
        assert_eq!(
            result.best_move,
            Move::new(Square::new(3, 3), Square::new(4, 2))
        );
        assert_eq!(result.best_score, 3);
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut board = Board::initial();
        let original = board;
        best_move(&mut board, Color::Black, 3).expect("Black has moves");
        assert_eq!(board, original);

        let mut board = defended_rook_position();
        let original = board;
        best_move(&mut board, Color::Black, 2).expect("Black has moves");
        assert_eq!(board, original);
    }

    #[test]
    fn ties_keep_the_first_enumerated_move() {
        let mut board = Board::initial();
        let mv = best_move(&mut board, Color::Black, 2).expect("Black has moves");
        assert_eq!(mv, Move::new(Square::new(0, 1), Square::new(2, 0)));
    }

    #[test]
    fn side_without_moves_reports_no_move_available() {
        let mut board = Board::empty();
        board.place(Square::new(7, 4), piece(Color::White, PieceKind::King));
        let err = best_move(&mut board, Color::Black, 2).expect_err("Black has no pieces");
        assert!(matches!(err, ChessErrors::NoMoveAvailable(Color::Black)));
    }

    #[test]
    fn stuck_opponent_is_scored_statically() {
        // The White pawn on A8 has nowhere to go, so White nodes are leaves.
        let mut board = Board::empty();
        board.place(Square::new(0, 4), piece(Color::Black, PieceKind::King));
        board.place(Square::new(4, 0), piece(Color::Black, PieceKind::Rook));
        board.place(Square::new(0, 0), piece(Color::White, PieceKind::Pawn));

        let result = search_best_move(
            &mut board,
            Color::Black,
            &LegalMoveGenerator,
            &MaterialScorer,
            SearchConfig::default(),
        )
        .expect("Black has moves");
        assert_eq!(
            result.best_move,
            Move::new(Square::new(4, 0), Square::new(0, 0))
        );
        assert_eq!(result.best_score, 105);
    }

    #[test]
    fn white_search_minimizes_the_black_score() {
        let mut board = Board::empty();
        board.place(Square::new(7, 4), piece(Color::White, PieceKind::King));
        board.place(Square::new(0, 4), piece(Color::Black, PieceKind::King));
        board.place(Square::new(5, 5), piece(Color::White, PieceKind::Knight));
        board.place(Square::new(3, 4), piece(Color::Black, PieceKind::Queen));
        board.place(Square::new(3, 6), piece(Color::Black, PieceKind::Pawn));

        let mv = best_move(&mut board, Color::White, 1).expect("White has moves");
        assert_eq!(mv, Move::new(Square::new(5, 5), Square::new(3, 4)));
    }

    #[test]
    fn alpha_beta_matches_plain_minimax() {
        let positions = [
            (Board::initial(), Color::Black),
            (Board::initial(), Color::White),
            (defended_rook_position(), Color::Black),
        ];

        for (board, side) in positions {
            for depth in 1..=3 {
                let mut plain_board = board;
                let plain = search_best_move(
                    &mut plain_board,
                    side,
                    &LegalMoveGenerator,
                    &MaterialScorer,
                    SearchConfig {
                        depth,
                        alpha_beta: false,
                    },
                )
                .expect("side has moves");

                let mut pruned_board = board;
                let pruned = search_best_move(
                    &mut pruned_board,
                    side,
                    &LegalMoveGenerator,
                    &MaterialScorer,
                    SearchConfig {
                        depth,
                        alpha_beta: true,
                    },
                )
                .expect("side has moves");

                assert_eq!(plain.best_move, pruned.best_move, "depth {depth}");
                assert_eq!(plain.best_score, pruned.best_score, "depth {depth}");
                assert!(pruned.nodes <= plain.nodes);
                assert_eq!(pruned_board, board);
            }
        }
    }
}

//! Fixed-depth minimax engine over material scoring.
//!
//! Default computer strategy. Deterministic: the same board, side and depth
//! always yield the same move.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{parse_bool_option, Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{search_best_move, SearchConfig};

pub struct MinimaxEngine {
    default_depth: u8,
    use_alpha_beta: bool,
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
}

impl MinimaxEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            use_alpha_beta: false,
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
        }
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.use_alpha_beta = enabled;
        self
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        if name.eq_ignore_ascii_case("Depth") {
            let depth = value
                .trim()
                .parse::<u8>()
                .map_err(|_| ChessErrors::InvalidOptionValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            self.default_depth = depth;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("AlphaBeta") {
            self.use_alpha_beta = parse_bool_option(name, value)?;
            return Ok(());
        }
        Err(ChessErrors::UnknownOption(name.to_owned()))
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let depth = params.depth.unwrap_or(self.default_depth);
        let mut scratch = *board;

        let result = search_best_move(
            &mut scratch,
            side,
            &self.move_generator,
            &self.scorer,
            SearchConfig {
                depth,
                alpha_beta: self.use_alpha_beta,
            },
        )?;

        let mut out = EngineOutput::new(result.best_move);
        out.best_score = Some(result.best_score);
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} alphabeta {}",
            depth, result.best_score, result.nodes, self.use_alpha_beta
        ));
        out.info_lines
            .push(format!("info string minimax_engine bestmove {}", result.best_move));
        Ok(out)
    }
}

//! Capture-preferring random engine.
//!
//! Picks uniformly among legal captures when any exist, otherwise uniformly
//! among all legal moves. Independent of the minimax engine; the two are
//! never blended.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::{capture_moves, LegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomCaptureEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomCaptureEngine {
    /// Entropy-seeded engine.
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomCaptureEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomCaptureEngine {
    fn name(&self) -> &str {
        "Random Capture"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        if name.eq_ignore_ascii_case("Seed") {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ChessErrors::InvalidOptionValue {
                    name: name.to_owned(),
                    value: value.to_owned(),
                })?;
            self.rng = StdRng::seed_from_u64(seed);
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
        let legal_moves = self.move_generator.generate_legal_moves(board, side);
        let captures = capture_moves(board, side);

        let pool = if captures.is_empty() {
            &legal_moves
        } else {
            &captures
        };
        let picked = *pool
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(ChessErrors::NoMoveAvailable(side))?;

        let mut out = EngineOutput::new(picked);
        out.info_lines.push(format!(
            "info string random_capture_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_capture_engine ignores requested_depth {}",
                depth
            ));
        }
        out.info_lines.push(format!(
            "info string random_capture_engine captures {}",
            captures.len()
        ));
        Ok(out)
    }
}

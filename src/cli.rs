//! Command-line configuration for the console game.

use clap::Parser;

use crate::engines::engine_select::{EngineSettings, EngineStrategy};
use crate::game_state::chess_rules::DEFAULT_SEARCH_DEPTH;

/// Play chess against a fixed-depth minimax engine from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "duel_chess", version, about)]
pub struct Cli {
    /// Move-selection strategy for the computer side.
    #[arg(short, long, value_enum, default_value_t = EngineStrategy::Minimax)]
    pub strategy: EngineStrategy,

    /// Search depth in plies, counting the computer's own move.
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub depth: u8,

    /// Prune the minimax search with alpha-beta (same moves, fewer nodes).
    #[arg(long, default_value = "false")]
    pub alpha_beta: bool,

    /// Seed for the random-capture strategy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer play both sides.
    #[arg(long, default_value = "false")]
    pub self_play: bool,

    /// Ply limit for self-play games.
    #[arg(long, default_value_t = 200)]
    pub max_plies: u16,

    /// Dump the game log to stderr when the game ends.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

impl Cli {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            strategy: self.strategy,
            depth: self.depth,
            alpha_beta: self.alpha_beta,
            seed: self.seed,
        }
    }
}

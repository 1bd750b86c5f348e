//! Strategy selection for the computer side.

use clap::ValueEnum;

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random_capture::RandomCaptureEngine;
use crate::engines::engine_trait::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EngineStrategy {
    /// Fixed-depth minimax over material (deterministic).
    #[default]
    Minimax,
    /// Random capture when one exists, otherwise any random legal move.
    RandomCapture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub strategy: EngineStrategy,
    pub depth: u8,
    pub alpha_beta: bool,
    pub seed: Option<u64>,
}

pub fn build_engine(settings: EngineSettings) -> Box<dyn Engine> {
    match settings.strategy {
        EngineStrategy::Minimax => Box::new(
            MinimaxEngine::new(settings.depth).with_alpha_beta(settings.alpha_beta),
        ),
        EngineStrategy::RandomCapture => match settings.seed {
            Some(seed) => Box::new(RandomCaptureEngine::with_seed(seed)),
            None => Box::new(RandomCaptureEngine::new()),
        },
    }
}

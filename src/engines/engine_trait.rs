//! Engine abstraction layer used by the turn controller.
//!
//! Defines common request parameters and output payloads so the available
//! move-selection strategies can be swapped at runtime behind one trait.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Move};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one request.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub best_move: Move,
    /// Search score, positive favors Black. `None` for engines that do not score.
    pub best_score: Option<i32>,
    pub info_lines: Vec<String>,
}

impl EngineOutput {
    pub fn new(best_move: Move) -> Self {
        Self {
            best_move,
            best_score: None,
            info_lines: Vec::new(),
        }
    }
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), ChessErrors> {
        Err(ChessErrors::UnknownOption(name.to_owned()))
    }

    /// Pick a move for `side`. The caller's board is never modified.
    ///
    /// Returns `NoMoveAvailable` when `side` cannot move.
    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors>;
}

/// Parse an on/off engine option the way UCI front-ends spell it.
pub(crate) fn parse_bool_option(name: &str, value: &str) -> Result<bool, ChessErrors> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ChessErrors::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool_option;
    use crate::chess_errors::ChessErrors;

    #[test]
    fn bool_options_accept_common_spellings() {
        assert!(parse_bool_option("AlphaBeta", "on").expect("on parses"));
        assert!(parse_bool_option("AlphaBeta", " TRUE ").expect("TRUE parses"));
        assert!(!parse_bool_option("AlphaBeta", "0").expect("0 parses"));
        assert!(matches!(
            parse_bool_option("AlphaBeta", "maybe"),
            Err(ChessErrors::InvalidOptionValue { .. })
        ));
    }
}

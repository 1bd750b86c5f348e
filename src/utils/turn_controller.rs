//! Console turn loop.
//!
//! Owns the `GameState`, alternates sides, validates human input through the
//! move engine and asks the configured engine for computer moves. The game
//! ends when a king has been captured, when the side to move has no legal
//! move, when input ends or the player quits, or after `max_plies` in
//! self-play.

use std::io::{BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::parse_move;
use crate::utils::game_log::GameLog;
use crate::utils::render_game_state::render_board;

pub enum Player {
    Human,
    Computer(Box<dyn Engine>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    KingCaptured { winner: Color },
    NoMoveAvailable { side: Color },
    MaxPliesReached,
    Quit,
}

pub struct TurnController {
    game: GameState,
    white: Player,
    black: Player,
    max_plies: Option<u16>,
    log: GameLog,
}

impl TurnController {
    pub fn new(white: Player, black: Player, log: GameLog) -> Self {
        Self::from_game(GameState::new_game(), white, black, log)
    }

    pub fn from_game(game: GameState, white: Player, black: Player, log: GameLog) -> Self {
        Self {
            game,
            white,
            black,
            max_plies: None,
            log,
        }
    }

    pub fn with_max_plies(mut self, max_plies: u16) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Play until the game ends. `input` is only read on human turns.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<GameOutcome, ChessErrors> {
        let outcome = loop {
            writeln!(out, "{}", render_board(&self.game.board))?;

            if let Some(winner) = self.game.winner() {
                break GameOutcome::KingCaptured { winner };
            }
            if self.max_plies.is_some_and(|max| self.game.ply >= max) {
                break GameOutcome::MaxPliesReached;
            }

            let side = self.game.side_to_move;
            if self.game.legal_moves().is_empty() {
                break GameOutcome::NoMoveAvailable { side };
            }

            match self.take_turn(side, input, out)? {
                Some(mv) => self.log.log(&format!("{side} plays {mv}")),
                None => break GameOutcome::Quit,
            }
        };

        writeln!(out, "{}", describe_outcome(outcome))?;
        self.log
            .log(&format!("game over after {} plies: {outcome:?}", self.game.ply));
        Ok(outcome)
    }

    fn take_turn<R: BufRead, W: Write>(
        &mut self,
        side: Color,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<Move>, ChessErrors> {
        let player = match side {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };

        match player {
            Player::Human => human_turn(&mut self.game, &mut self.log, input, out),
            Player::Computer(engine) => {
                writeln!(out, "{side} ({}) thinking...", engine.name())?;
                let output = engine.choose_move(&self.game.board, side, &GoParams::default())?;
                for line in &output.info_lines {
                    self.log.log(line);
                }
                let mv = output.best_move;
                self.game.play(mv)?;
                writeln!(out, "{side} moved {mv}.")?;
                Ok(Some(mv))
            }
        }
    }
}

/// Prompt until a legal move is played. `None` means quit or end of input.
fn human_turn<R: BufRead, W: Write>(
    game: &mut GameState,
    log: &mut GameLog,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Move>, ChessErrors> {
    let mut line = String::new();
    loop {
        write!(out, "{} move (A2 A3): ", game.side_to_move)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }

        let mv = match parse_move(text) {
            Ok(mv) => mv,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };

        match game.play(mv) {
            Ok(_) => return Ok(Some(mv)),
            Err(err @ ChessErrors::IllegalMove { .. }) => {
                log.log(&err.to_string());
                writeln!(out, "{err}")?;
            }
            Err(err) => return Err(err),
        }
    }
}

pub fn describe_outcome(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::KingCaptured { winner } => {
            format!("{} king captured. {winner} wins.", winner.opposite())
        }
        GameOutcome::NoMoveAvailable { side } => {
            format!("{side} has no move available. {} wins.", side.opposite())
        }
        GameOutcome::MaxPliesReached => "Ply limit reached. Game drawn.".to_owned(),
        GameOutcome::Quit => "Game abandoned.".to_owned(),
    }
}

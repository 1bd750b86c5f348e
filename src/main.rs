use std::io::{self, Write};

use clap::Parser;

use duel_chess::cli::Cli;
use duel_chess::engines::engine_select::build_engine;
use duel_chess::utils::game_log::GameLog;
use duel_chess::utils::turn_controller::{Player, TurnController};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.engine_settings();

    let white = if cli.self_play {
        Player::Computer(build_engine(settings))
    } else {
        Player::Human
    };
    let black = Player::Computer(build_engine(settings));

    let mut controller = TurnController::new(white, black, GameLog::new());
    if cli.self_play {
        controller = controller.with_max_plies(cli.max_plies);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let outcome = controller.run(&mut input, &mut stdout)?;
    stdout.flush()?;

    if cli.verbose {
        eprintln!("{}", controller.log().dump());
        eprintln!("{outcome:?} after {} plies", controller.game().ply);
    }
    Ok(())
}

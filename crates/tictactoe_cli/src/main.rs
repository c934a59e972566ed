//! tictactoe - play the engine from a terminal.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tictactoe_cli::{
    ArenaSettings, Cli, CliConfig, Command, ComputerSeat, HumanSeat, legal_squares,
    parse_position, run_arena, run_game,
};
use tictactoe_engine::{ComputerPlayer, Game, Player};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Plies before a No-Draw game against a human is abandoned.
const PLAY_MAX_PLIES: usize = 1000;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?config, "Settings resolved");

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            seed,
        } => run_play(config.with_overrides(mode, difficulty, seed)),
        Command::Arena {
            x,
            o,
            games,
            mode,
            max_plies,
            seed,
        } => {
            let variant = mode.unwrap_or(*config.mode());
            let seed = seed.or(*config.seed()).unwrap_or_else(rand::random);
            let tally = run_arena(ArenaSettings::new(variant, x, o, games, max_plies, seed))?;
            println!(
                "{} rules: X {} vs O {}, {games} games, seed {seed}",
                variant.label(),
                x.label(),
                o.label(),
            );
            println!("{tally}");
            Ok(())
        }
        Command::Legal {
            board,
            x_history,
            o_history,
            to_move,
            mode,
        } => {
            let variant = mode.unwrap_or(*config.mode());
            let snapshot = parse_position(&board, &x_history, &o_history, to_move)?;
            let squares: Vec<String> = legal_squares(&snapshot, variant)
                .into_iter()
                .map(|pos| (pos + 1).to_string())
                .collect();
            println!("{} to move: {}", snapshot.to_move(), squares.join(" "));
            Ok(())
        }
    }
}

/// Human (X) against the computer (O) on stdin/stdout.
fn run_play(config: CliConfig) -> Result<()> {
    let variant = *config.mode();
    let difficulty = *config.difficulty();
    info!(%variant, %difficulty, "Starting game");

    let computer = match config.seed() {
        Some(seed) => ComputerPlayer::seeded(difficulty, variant, *seed),
        None => ComputerPlayer::new(difficulty, variant),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}: {}", variant.label(), variant.description())?;
    writeln!(out, "{}: {}", difficulty.label(), difficulty.description())?;
    writeln!(out, "You are {}. Enter 1-9 or a square name; q quits.\n", Player::X)?;

    let mut game = Game::new(variant);
    writeln!(out, "{}", game.board().display())?;

    let mut human = HumanSeat::new("You", io::stdin().lock(), io::stdout());
    let mut computer = ComputerSeat::new(computer);
    run_game(&mut game, &mut human, &mut computer, PLAY_MAX_PLIES, Some(&mut out))?;
    Ok(())
}

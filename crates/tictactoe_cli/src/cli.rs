//! Command-line interface for the tictactoe binary.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Difficulty, Player, RuleVariant};

/// Tic-tac-toe against the computer, standard or No-Draw rules
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against the computer, standard or No-Draw rules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play X against the computer on the terminal
    Play {
        /// Rule set: standard or no_draw
        #[arg(short, long)]
        mode: Option<RuleVariant>,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a computer-vs-computer series and print the tally
    Arena {
        /// X's strength
        #[arg(short = 'x', long, default_value = "medium")]
        x: Difficulty,

        /// O's strength
        #[arg(short = 'o', long, default_value = "hard")]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Rule set: standard or no_draw
        #[arg(short, long)]
        mode: Option<RuleVariant>,

        /// Moves per game before it counts as unfinished
        #[arg(long, default_value = "200")]
        max_plies: usize,

        /// Base seed for both players
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the legal squares (1-9) for the side to move
    Legal {
        /// Board in compact notation, e.g. "XX.OO...." or "X..|.O.|..."
        board: String,

        /// X's squares (0-8), oldest first, comma separated
        #[arg(long, value_delimiter = ',')]
        x_history: Vec<usize>,

        /// O's squares (0-8), oldest first, comma separated
        #[arg(long, value_delimiter = ',')]
        o_history: Vec<usize>,

        /// Side to move (x or o); inferred from mark counts when omitted
        #[arg(long)]
        to_move: Option<Player>,

        /// Rule set: standard or no_draw
        #[arg(short, long)]
        mode: Option<RuleVariant>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_play() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "-m", "no_draw", "-d", "hard"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        match cli.command {
            Command::Play {
                mode,
                difficulty,
                seed,
            } => {
                assert_eq!(mode, Some(RuleVariant::NoDraw));
                assert_eq!(difficulty, Some(Difficulty::Hard));
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parses_legal_histories() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "legal",
            "XO.XO.O.X",
            "--x-history",
            "0,3,8",
            "--o-history",
            "1,4,6",
            "--to-move",
            "x",
            "--config",
            "other.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        match cli.command {
            Command::Legal {
                x_history,
                o_history,
                to_move,
                ..
            } => {
                assert_eq!(x_history, vec![0, 3, 8]);
                assert_eq!(o_history, vec![1, 4, 6]);
                assert_eq!(to_move, Some(Player::X));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "play", "-d", "impossible"]).is_err());
    }
}

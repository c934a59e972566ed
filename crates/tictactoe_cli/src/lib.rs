//! Terminal harness for the tic-tac-toe engine.
//!
//! - **play**: a human plays X against the computer on stdin/stdout.
//! - **arena**: computer-vs-computer series with reproducible seeds.
//! - **legal**: legal squares for a position typed on the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod cli;
mod config;
mod legal;
mod play;
mod players;

// Crate-level exports - Command line and settings
pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Commands
pub use arena::{ArenaSettings, ArenaTally, run_arena};
pub use legal::{infer_to_move, legal_squares, parse_position};
pub use play::run_game;
pub use players::{ComputerSeat, HumanSeat, Seat};

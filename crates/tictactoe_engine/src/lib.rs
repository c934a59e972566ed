//! Tic-tac-toe engine and computer opponents.
//!
//! Two rule sets share one engine:
//!
//! - **Standard**: classic rules, a full board without a line is a draw.
//! - **No-Draw**: each player keeps at most three marks; placing a fourth
//!   removes that player's oldest mark first, so only a line ends the game.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] validates and applies moves, tracks status and
//!   No-Draw move histories.
//! - **Rules**: [`rules`] holds the pure line and full-board checks.
//! - **Adapter**: [`Snapshot`] is the plain-data view the computer reads.
//! - **AI**: [`ai`] holds the Easy, Medium and Hard strategies and
//!   [`ComputerPlayer`], which dispatches on difficulty and rules.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{ComputerPlayer, Difficulty, Game, RuleVariant};
//!
//! let mut game = Game::new(RuleVariant::NoDraw);
//! let mut computer = ComputerPlayer::seeded(Difficulty::Hard, RuleVariant::NoDraw, 7);
//!
//! game.apply_move(4)?;
//! let reply = computer.play(&mut game)?;
//! assert!(reply.is_some());
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;
mod variant;

// Crate-level exports - Engine
pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use history::{HistoryError, MAX_MARKS, MoveHistory};
pub use variant::RuleVariant;

// Crate-level exports - Board
pub use position::Position;
pub use types::{Board, BoardParseError, NUM_SQUARES, Player, Square};

// Crate-level exports - Adapter surface and AI
pub use ai::{ComputerPlayer, Difficulty, choose_move};
pub use snapshot::Snapshot;

// Crate-level exports - Invariants
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};

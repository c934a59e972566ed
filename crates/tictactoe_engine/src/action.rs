//! First-class action types for tic-tac-toe.
//!
//! An applied move is a domain event: it records who moved, where, and
//! (under No-Draw rules) which square the move vacated.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move that the engine accepted and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// The square the mark was placed on.
    pub position: usize,
    /// The player's oldest square, cleared before placing (No-Draw only).
    pub evicted: Option<usize>,
}

impl Move {
    /// Creates a new move record.
    pub fn new(player: Player, position: usize, evicted: Option<usize>) -> Self {
        Self {
            player,
            position,
            evicted,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)?;
        if let Some(evicted) = self.evicted {
            write!(f, " (removed {evicted})")?;
        }
        Ok(())
    }
}

/// Why the engine rejected a move. Rejection never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a square (valid squares are 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The square holds the opponent's mark.
    #[display("Square {} holds the opponent's mark", _0)]
    OpponentSquare(usize),

    /// The square holds the mover's own mark and it is not the one the
    /// move would evict.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),
}

impl std::error::Error for MoveError {}

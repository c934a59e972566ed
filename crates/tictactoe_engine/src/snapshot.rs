//! Plain-data view of a game handed to the computer players.
//!
//! The AIs never touch a live [`Game`]; they read a [`Snapshot`], which owns
//! copies of the board and both histories.

use crate::ai::candidates;
use crate::game::Game;
use crate::history::MoveHistory;
use crate::types::{Board, Player};
use crate::variant::RuleVariant;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board, both move histories and the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// The nine squares.
    board: Board,
    /// X's squares, oldest first (No-Draw only).
    x_history: MoveHistory,
    /// O's squares, oldest first (No-Draw only).
    o_history: MoveHistory,
    /// Whose move it is.
    to_move: Player,
}

impl Snapshot {
    /// A snapshot with no histories, as used under standard rules.
    pub fn standard(board: Board, to_move: Player) -> Self {
        Self::new(board, MoveHistory::new(), MoveHistory::new(), to_move)
    }

    /// `player`'s history.
    pub fn history(&self, player: Player) -> &MoveHistory {
        match player {
            Player::X => &self.x_history,
            Player::O => &self.o_history,
        }
    }

    /// Squares the side to move may play under `variant`, ascending.
    ///
    /// Under No-Draw rules this includes the mover's oldest square when
    /// their history is full and the mark is still on the board.
    pub fn legal_moves(&self, variant: RuleVariant) -> Vec<usize> {
        match variant {
            RuleVariant::Standard => self.board.empty_positions(),
            RuleVariant::NoDraw => {
                let mut moves = candidates(&self.board, self.history(self.to_move), self.to_move);
                moves.sort_unstable();
                moves
            }
        }
    }

    /// The same position with X and O swapped.
    ///
    /// The computer players always search as O; mirroring lets them move
    /// for X as well.
    #[instrument(skip(self))]
    pub fn mirrored(&self) -> Self {
        Self {
            board: self.board.mirrored(),
            x_history: self.o_history,
            o_history: self.x_history,
            to_move: self.to_move.opponent(),
        }
    }
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: *game.board(),
            x_history: *game.history(Player::X),
            o_history: *game.history(Player::O),
            to_move: game.current_player(),
        }
    }
}

impl Game {
    /// Copies out the state the computer players consume.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
}

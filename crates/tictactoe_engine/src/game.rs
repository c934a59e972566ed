//! The board/rules engine.
//!
//! One [`Game`] type serves both rule sets; the [`RuleVariant`] tag decides
//! move legality, eviction and whether a full board ends the game.

use crate::action::{Move, MoveError};
use crate::history::MoveHistory;
use crate::invariants::assert_invariants;
use crate::rules;
use crate::types::{Board, NUM_SQUARES, Player, Square};
use crate::variant::RuleVariant;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Fresh board, no move applied yet.
    NotStarted,
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw (standard rules only).
    Draw,
}

impl GameStatus {
    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won(_) | GameStatus::Draw)
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    variant: RuleVariant,
    board: Board,
    current_player: Player,
    status: GameStatus,
    x_history: MoveHistory,
    o_history: MoveHistory,
}

impl Game {
    /// Creates a new game under the given rules. X moves first.
    #[instrument]
    pub fn new(variant: RuleVariant) -> Self {
        Self {
            variant,
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::NotStarted,
            x_history: MoveHistory::new(),
            o_history: MoveHistory::new(),
        }
    }

    /// Clears the board and histories and hands the move back to X.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new(self.variant);
    }

    /// The rule set in force.
    pub fn variant(&self) -> RuleVariant {
        self.variant
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the nine squares.
    pub fn board_copy(&self) -> [Square; NUM_SQUARES] {
        *self.board.squares()
    }

    /// Returns the current player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has a winner or is drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winner, if the game has one.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// The squares `player` currently holds, oldest first.
    ///
    /// Only tracked under No-Draw rules; always empty under standard rules.
    pub fn history(&self, player: Player) -> &MoveHistory {
        match player {
            Player::X => &self.x_history,
            Player::O => &self.o_history,
        }
    }

    fn history_mut(&mut self, player: Player) -> &mut MoveHistory {
        match player {
            Player::X => &mut self.x_history,
            Player::O => &mut self.o_history,
        }
    }

    /// The square `player`'s next move will vacate.
    ///
    /// `None` under standard rules or while the player has fewer than
    /// three marks down.
    pub fn oldest_mark(&self, player: Player) -> Option<usize> {
        if !self.variant.evicts() {
            return None;
        }
        self.history(player).oldest_if_full()
    }

    /// Empty squares, ascending.
    ///
    /// This never includes the No-Draw oldest-mark square; callers that need
    /// it add [`Game::oldest_mark`] themselves.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.board.empty_positions()
    }

    /// Checks a move without applying it.
    pub fn check_move(&self, pos: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let square = self.board.get(pos).ok_or(MoveError::OutOfBounds(pos))?;
        match square {
            Square::Empty => Ok(()),
            Square::Occupied(owner) if owner != self.current_player => {
                Err(MoveError::OpponentSquare(pos))
            }
            Square::Occupied(_) => {
                if self.oldest_mark(self.current_player) == Some(pos) {
                    Ok(())
                } else {
                    Err(MoveError::SquareOccupied(pos))
                }
            }
        }
    }

    /// True iff [`Game::apply_move`] would accept `pos`. Never mutates.
    pub fn is_valid_move(&self, pos: usize) -> bool {
        self.check_move(pos).is_ok()
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Under No-Draw rules a player already holding three marks first loses
    /// their oldest one. A completed line ends the game; under standard rules
    /// a full board without a line is a draw. Otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the game untouched if the move is
    /// not valid.
    #[instrument(skip(self), fields(player = %self.current_player, variant = %self.variant))]
    pub fn apply_move(&mut self, pos: usize) -> Result<Move, MoveError> {
        self.check_move(pos)?;

        let player = self.current_player;
        let mark = Square::Occupied(player);

        let evicted = if self.variant.evicts() {
            let evicted = self.history_mut(player).push(pos);
            if let Some(old) = evicted {
                self.board.put(old, Square::Empty);
            }
            evicted
        } else {
            None
        };
        self.board.put(pos, mark);

        let applied = Move::new(player, pos, evicted);
        debug!(%applied, "Move applied");

        if let Some(winner) = rules::check_winner(&self.board) {
            info!(%winner, "Game won");
            self.status = GameStatus::Won(winner);
        } else if !self.variant.evicts() && rules::is_draw(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.status = GameStatus::InProgress;
            self.current_player = player.opponent();
        }

        assert_invariants(self);
        Ok(applied)
    }

    /// The line that won the game, if there is a winner.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winner()
            .and_then(|winner| rules::winning_line(&self.board, winner))
    }

    /// Human-readable status, from the point of view of a human playing X
    /// against the computer.
    pub fn status_text(&self) -> &'static str {
        match self.status {
            GameStatus::NotStarted | GameStatus::InProgress => match self.current_player {
                Player::X => "Your turn (X)",
                Player::O => "Computer's turn (O)",
            },
            GameStatus::Won(Player::X) => "You win!",
            GameStatus::Won(Player::O) => "Computer wins!",
            GameStatus::Draw => "It's a draw!",
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RuleVariant::Standard)
    }
}

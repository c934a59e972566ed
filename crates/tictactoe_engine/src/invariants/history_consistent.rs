//! History consistency invariant: histories and board agree.

use super::Invariant;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: under No-Draw rules, every square in a player's history holds
/// that player's mark, and the player has no marks anywhere else.
///
/// Under standard rules histories stay empty.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let history = game.history(player);
            if !game.variant().evicts() {
                return history.is_empty();
            }
            let board = game.board();
            history
                .as_slice()
                .iter()
                .all(|&pos| board.get(pos) == Some(Square::Occupied(player)))
                && board.count(player) == history.len()
        })
    }

    fn description() -> &'static str {
        "Move histories match the marks on the board"
    }
}

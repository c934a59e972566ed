//! Mark cap invariant for the No-Draw variant.

use super::Invariant;
use crate::game::Game;
use crate::history::MAX_MARKS;
use crate::types::Player;

/// Invariant: under No-Draw rules nobody holds more than three marks, nor
/// more marks than their history records.
///
/// Holds trivially under standard rules.
pub struct MarkCapInvariant;

impl Invariant<Game> for MarkCapInvariant {
    fn holds(game: &Game) -> bool {
        if !game.variant().evicts() {
            return true;
        }

        [Player::X, Player::O].into_iter().all(|player| {
            let on_board = game.board().count(player);
            let history = game.history(player);
            on_board <= MAX_MARKS && history.len() <= MAX_MARKS && on_board <= history.len()
        })
    }

    fn description() -> &'static str {
        "Each player holds at most three marks, all recorded in their history"
    }
}

//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::game::Game;
use crate::types::Player;

/// Invariant: X holds as many marks as O, or exactly one more.
///
/// Under standard rules, while the game is running the side to move also
/// follows from the counts. Under No-Draw rules counts saturate at three, so
/// only the count relation is checked.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        if game.variant().evicts() || game.is_terminal() {
            return true;
        }

        let expected = if x_count == o_count { Player::X } else { Player::O };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

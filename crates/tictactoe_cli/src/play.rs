//! Turn loop shared by the `play` and `arena` commands.

use crate::players::Seat;
use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{Game, GameStatus, Player};
use tracing::{info, instrument};

/// Plays `game` to the end, or until `max_plies` moves have been made.
///
/// When `out` is given, the board is printed after every move along with
/// any mark the move removed.
#[instrument(skip_all, fields(variant = %game.variant(), x = %x.name(), o = %o.name()))]
pub fn run_game(
    game: &mut Game,
    x: &mut dyn Seat,
    o: &mut dyn Seat,
    max_plies: usize,
    mut out: Option<&mut dyn Write>,
) -> Result<GameStatus> {
    let mut plies = 0;
    while !game.is_terminal() && plies < max_plies {
        let seat: &mut dyn Seat = match game.current_player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let pos = seat.choose(game)?;
        let applied = game.apply_move(pos)?;
        plies += 1;

        if let Some(out) = out.as_deref_mut() {
            writeln!(out, "\n{} plays {}", seat.name(), pos + 1)?;
            if let Some(evicted) = applied.evicted {
                writeln!(out, "({}'s mark on {} removed)", applied.player, evicted + 1)?;
            }
            writeln!(out, "{}", game.board().display())?;
        }
    }

    if let Some(out) = out {
        writeln!(out, "\n{}", game.status_text())?;
    }
    info!(status = ?game.status(), plies, "Game finished");
    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{ComputerSeat, HumanSeat};
    use std::io::Cursor;
    use tictactoe_engine::{ComputerPlayer, Difficulty, RuleVariant};

    #[test]
    fn test_human_loses_to_hard() {
        // Human plays 1, 2, 8: Hard takes the center, blocks 3, then wins.
        let mut game = Game::new(RuleVariant::Standard);
        let mut human = HumanSeat::new("You", Cursor::new("1\n2\n8\n"), Vec::new());
        let mut computer = ComputerSeat::new(ComputerPlayer::seeded(
            Difficulty::Hard,
            RuleVariant::Standard,
            0,
        ));
        let mut out = Vec::new();
        let status = run_game(&mut game, &mut human, &mut computer, 9, Some(&mut out)).unwrap();
        assert_eq!(status, GameStatus::Won(Player::O));

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("Computer (Hard) plays 5"));
        assert!(shown.ends_with("Computer wins!\n"));
    }

    #[test]
    fn test_ply_cap_stops_no_draw_game() {
        let mut game = Game::new(RuleVariant::NoDraw);
        let mut x = ComputerSeat::new(ComputerPlayer::seeded(Difficulty::Easy, RuleVariant::NoDraw, 1));
        let mut o = ComputerSeat::new(ComputerPlayer::seeded(Difficulty::Easy, RuleVariant::NoDraw, 2));
        run_game(&mut game, &mut x, &mut o, 4, None).unwrap();
        assert!(!game.is_terminal());
        assert_eq!(game.board().empty_count(), 5);
    }
}

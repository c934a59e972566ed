//! Seats at the board: a human on a text stream, or the computer.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{ComputerPlayer, Game, Position};
use tracing::{debug, instrument, warn};

/// Something that picks moves for one side.
pub trait Seat {
    /// The square to play in `game` for the side to move.
    fn choose(&mut self, game: &Game) -> Result<usize>;

    /// Display name.
    fn name(&self) -> &str;
}

/// A human typing square numbers (1-9) or names ("center").
pub struct HumanSeat<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanSeat<R, W> {
    /// Creates a human seat reading moves from `input` and prompting on
    /// `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Seat for HumanSeat<R, W> {
    #[instrument(skip(self, game), fields(seat = %self.name))]
    fn choose(&mut self, game: &Game) -> Result<usize> {
        loop {
            write!(self.output, "{} > ", game.status_text())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed");
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                bail!("Player quit");
            }

            let Some(position) = Position::from_label_or_number(line) else {
                writeln!(self.output, "Enter a square 1-9 or a name like \"center\".")?;
                continue;
            };
            let pos = position.to_index();
            match game.check_move(pos) {
                Ok(()) => {
                    debug!(pos, "Human chose");
                    return Ok(pos);
                }
                Err(e) => {
                    warn!(pos, error = %e, "Rejected human move");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// The computer, at a fixed difficulty.
pub struct ComputerSeat {
    name: String,
    player: ComputerPlayer,
}

impl ComputerSeat {
    /// Wraps a computer player, named after its difficulty.
    pub fn new(player: ComputerPlayer) -> Self {
        Self {
            name: format!("Computer ({})", player.difficulty().label()),
            player,
        }
    }
}

impl Seat for ComputerSeat {
    fn choose(&mut self, game: &Game) -> Result<usize> {
        match self.player.choose(&game.snapshot()) {
            Some(pos) => Ok(pos),
            None => bail!("{} has no legal move", self.name),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

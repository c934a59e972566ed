//! Computer-vs-computer series.

use crate::play::run_game;
use crate::players::ComputerSeat;
use anyhow::Result;
use derive_getters::Getters;
use tictactoe_engine::{ComputerPlayer, Difficulty, Game, GameStatus, Player, RuleVariant};
use tracing::{debug, info, instrument};

/// Results of one series. Nothing is kept between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct ArenaTally {
    /// Games X won.
    x_wins: u32,
    /// Games O won.
    o_wins: u32,
    /// Drawn games (standard rules only).
    draws: u32,
    /// Games stopped at the ply cap.
    unfinished: u32,
}

impl ArenaTally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::NotStarted | GameStatus::InProgress => self.unfinished += 1,
        }
    }

    /// Games played.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws + self.unfinished
    }
}

impl std::fmt::Display for ArenaTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}  O wins: {}  Draws: {}  Unfinished: {}",
            self.x_wins, self.o_wins, self.draws, self.unfinished
        )
    }
}

/// Who plays and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ArenaSettings {
    /// Rule set.
    pub variant: RuleVariant,
    /// X's strength.
    pub x: Difficulty,
    /// O's strength.
    pub o: Difficulty,
    /// Number of games.
    pub games: u32,
    /// Moves per game before it is counted as unfinished.
    pub max_plies: usize,
    /// Base seed; game `n` seeds X with `seed + 2n` and O with `seed + 2n + 1`.
    pub seed: u64,
}

/// Plays the series and tallies the results.
#[instrument]
pub fn run_arena(settings: ArenaSettings) -> Result<ArenaTally> {
    let mut tally = ArenaTally::default();
    for n in 0..u64::from(settings.games) {
        let base = settings.seed.wrapping_add(2 * n);
        let mut x = ComputerSeat::new(ComputerPlayer::seeded(settings.x, settings.variant, base));
        let mut o = ComputerSeat::new(ComputerPlayer::seeded(
            settings.o,
            settings.variant,
            base.wrapping_add(1),
        ));
        let mut game = Game::new(settings.variant);
        let status = run_game(&mut game, &mut x, &mut o, settings.max_plies, None)?;
        debug!(game = n, ?status, "Arena game done");
        tally.record(status);
    }
    info!(%tally, "Arena finished");
    Ok(tally)
}

//! Computer opponents.
//!
//! Every strategy plays O against a [`Snapshot`] and answers with a single
//! square index, or `None` when it has nothing legal to play. To move for X,
//! [`ComputerPlayer`] mirrors the snapshot first.

pub mod easy;
pub mod hard;
pub mod hard_no_draw;
pub mod medium;
pub mod placement;

use crate::action::{Move, MoveError};
use crate::game::Game;
use crate::history::MoveHistory;
use crate::snapshot::Snapshot;
use crate::types::{Board, Player};
use crate::variant::RuleVariant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Squares `player` may play under No-Draw rules, ascending: every empty
/// square, then the player's oldest square when the history is full and
/// the mark is still there.
pub(crate) fn candidates(board: &Board, history: &MoveHistory, player: Player) -> Vec<usize> {
    let mut moves = board.empty_positions();
    if let Some(oldest) = history.oldest_if_full() {
        if board.get(oldest).is_some_and(|square| square.is(player)) {
            moves.push(oldest);
        }
    }
    moves
}

/// Computer strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    /// Random legal moves.
    Easy,
    /// Takes a win, else blocks, else random.
    #[default]
    Medium,
    /// Full game-tree search.
    Hard,
}

impl Difficulty {
    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// One-line description of how the computer plays.
    pub fn description(self) -> &'static str {
        match self {
            Self::Easy => "Computer plays randomly.",
            Self::Medium => "Computer blocks and tries to win.",
            Self::Hard => "Unbeatable AI (Minimax).",
        }
    }
}

/// O's move for `snapshot` at the given strength and rules.
///
/// Under standard rules the histories are ignored.
pub fn choose_move<R: Rng + ?Sized>(
    difficulty: Difficulty,
    variant: RuleVariant,
    snapshot: &Snapshot,
    rng: &mut R,
) -> Option<usize> {
    let board = snapshot.board();
    let (x_history, o_history) = (snapshot.x_history(), snapshot.o_history());
    match (difficulty, variant) {
        (Difficulty::Easy, RuleVariant::Standard) => easy::choose_move(board, rng),
        (Difficulty::Easy, RuleVariant::NoDraw) => easy::choose_move_no_draw(board, o_history, rng),
        (Difficulty::Medium, RuleVariant::Standard) => medium::choose_move(board, rng),
        (Difficulty::Medium, RuleVariant::NoDraw) => {
            medium::choose_move_no_draw(board, x_history, o_history, rng)
        }
        (Difficulty::Hard, RuleVariant::Standard) => hard::choose_move(board),
        (Difficulty::Hard, RuleVariant::NoDraw) => {
            hard_no_draw::choose_move(board, x_history, o_history)
        }
    }
}

/// A computer opponent with its own random source.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    difficulty: Difficulty,
    variant: RuleVariant,
    rng: StdRng,
}

impl ComputerPlayer {
    /// A player seeded from OS entropy.
    pub fn new(difficulty: Difficulty, variant: RuleVariant) -> Self {
        Self {
            difficulty,
            variant,
            rng: StdRng::from_os_rng(),
        }
    }

    /// A player whose random choices are reproducible.
    pub fn seeded(difficulty: Difficulty, variant: RuleVariant, seed: u64) -> Self {
        Self {
            difficulty,
            variant,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Strength.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Rules the player assumes.
    pub fn variant(&self) -> RuleVariant {
        self.variant
    }

    /// The square to play for the side to move in `snapshot`.
    #[instrument(skip(self, snapshot), fields(difficulty = %self.difficulty, variant = %self.variant, to_move = %snapshot.to_move()))]
    pub fn choose(&mut self, snapshot: &Snapshot) -> Option<usize> {
        let choice = match snapshot.to_move() {
            Player::O => choose_move(self.difficulty, self.variant, snapshot, &mut self.rng),
            Player::X => choose_move(
                self.difficulty,
                self.variant,
                &snapshot.mirrored(),
                &mut self.rng,
            ),
        };
        debug!(?choice, "Computer chose");
        choice
    }

    /// Chooses and applies a move for the side to move in `game`.
    ///
    /// Returns `Ok(None)` when the game is over or no square is available.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveError`] if the chosen square is rejected.
    pub fn play(&mut self, game: &mut Game) -> Result<Option<Move>, MoveError> {
        if game.is_terminal() {
            return Ok(None);
        }
        match self.choose(&game.snapshot()) {
            Some(pos) => game.apply_move(pos).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_candidates_adds_oldest_when_full() {
        let board: Board = "OXXXO..O.".parse().unwrap();
        let history = MoveHistory::from_slice(&[0, 4, 7]).unwrap();
        assert_eq!(candidates(&board, &history, Player::O), vec![5, 6, 8, 0]);

        let partial = MoveHistory::from_slice(&[4, 7]).unwrap();
        assert_eq!(candidates(&board, &partial, Player::O), vec![5, 6, 8]);
    }

    #[test]
    fn test_candidates_skip_stale_oldest() {
        let board: Board = "XXO.O....".parse().unwrap();
        let history = MoveHistory::from_slice(&[1, 2, 4]).unwrap();
        assert_eq!(candidates(&board, &history, Player::O), vec![3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_candidates_ignore_off_board_oldest() {
        let board: Board = ".OO......".parse().unwrap();
        let mut history = MoveHistory::new();
        for pos in [12, 1, 2] {
            history.push(pos);
        }
        assert_eq!(candidates(&board, &history, Player::O), vec![0, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::from_str("hard").unwrap(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.to_string(), "easy");
        for difficulty in Difficulty::iter() {
            assert!(!difficulty.label().is_empty());
            assert!(!difficulty.description().is_empty());
        }
    }

    #[test]
    fn test_computer_can_move_for_x() {
        // X to move with O threatening the top row: a Hard X must block at 2.
        let board: Board = "OO..X....".parse().unwrap();
        let snapshot = Snapshot::standard(board, Player::X);
        let mut computer = ComputerPlayer::seeded(Difficulty::Hard, RuleVariant::Standard, 1);
        assert_eq!(computer.choose(&snapshot), Some(2));
    }

    #[test]
    fn test_play_applies_move() {
        let mut game = Game::new(RuleVariant::Standard);
        game.apply_move(0).unwrap();
        let mut computer = ComputerPlayer::seeded(Difficulty::Hard, RuleVariant::Standard, 9);
        let applied = computer.play(&mut game).unwrap().unwrap();
        assert_eq!(applied.player, Player::O);
        assert_eq!(applied.position, 4);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_play_is_noop_after_game_over() {
        let mut game = Game::new(RuleVariant::Standard);
        for pos in [0, 3, 1, 4, 2] {
            game.apply_move(pos).unwrap();
        }
        let mut computer = ComputerPlayer::seeded(Difficulty::Easy, RuleVariant::Standard, 0);
        assert_eq!(computer.play(&mut game), Ok(None));
    }

    #[test]
    fn test_seeded_players_agree() {
        let snapshot = Snapshot::standard(Board::new(), Player::O);
        let mut a = ComputerPlayer::seeded(Difficulty::Easy, RuleVariant::Standard, 42);
        let mut b = ComputerPlayer::seeded(Difficulty::Easy, RuleVariant::Standard, 42);
        for _ in 0..20 {
            assert_eq!(a.choose(&snapshot), b.choose(&snapshot));
        }
    }
}

//! Hard opponent, standard rules: exhaustive minimax.
//!
//! O maximizes, X minimizes. The whole tree (at most 9! lines of play) is
//! small enough to search without pruning.

use super::placement::Placement;
use crate::rules::{has_line, is_full};
use crate::types::{Board, NUM_SQUARES, Player};
use tracing::{debug, instrument, trace};

/// Score of a win found at depth 0.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn score(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if has_line(board, Player::O) {
            return WIN_SCORE - depth;
        }
        if has_line(board, Player::X) {
            return depth - WIN_SCORE;
        }
        if is_full(board) {
            return 0;
        }

        let (player, mut best) = if maximizing {
            (Player::O, i32::MIN)
        } else {
            (Player::X, i32::MAX)
        };

        for pos in 0..NUM_SQUARES {
            if !board.is_empty(pos) {
                continue;
            }
            let mut placed = Placement::new(board, player, pos, None);
            let score = self.score(&mut placed, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

/// Minimax value of `board` from O's point of view.
///
/// Wins score `10 - depth` for O and `depth - 10` for X, so quicker wins and
/// slower losses are preferred; a full board with no line is 0. `board` is
/// used as scratch space and is unchanged on return.
pub fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    Minimax::default().score(board, depth, maximizing)
}

/// The best square for O, or `None` on a full board.
///
/// Ties go to the lowest index.
#[instrument(fields(board = %board))]
pub fn choose_move(board: &Board) -> Option<usize> {
    let mut scratch = *board;
    let mut search = Minimax::default();
    let mut best: Option<(usize, i32)> = None;

    for pos in board.empty_positions() {
        let mut placed = Placement::new(&mut scratch, Player::O, pos, None);
        let score = search.score(&mut placed, 0, false);
        trace!(pos, score, "Scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    debug!(choice = ?best, nodes = search.nodes, "Hard move");
    best.map(|(pos, _)| pos)
}

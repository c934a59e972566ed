//! Medium opponent: take a win, else block, else play randomly.
//!
//! One ply of lookahead, no recursion.

use super::candidates;
use crate::history::MoveHistory;
use crate::rules::{LINES, has_line};
use crate::types::{Board, Player, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// The empty square of the first line (canonical order) holding two of
/// `player`'s marks and one empty square.
pub fn find_winning_move(board: &Board, player: Player) -> Option<usize> {
    let squares = board.squares();
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| squares[i].is(player)).count();
        let empty = line.iter().find(|&&i| squares[i] == Square::Empty);
        match (owned, empty) {
            (2, Some(&pos)) => Some(pos),
            _ => None,
        }
    })
}

/// Standard rules: win, else block X, else a random empty square.
#[instrument(skip(rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move(board, Player::O) {
        debug!(pos, "Medium takes win");
        return Some(pos);
    }

    if let Some(pos) = find_winning_move(board, Player::X) {
        debug!(pos, "Medium blocks");
        return Some(pos);
    }

    let choice = empty.choose(rng).copied();
    debug!(?choice, "Medium plays randomly");
    choice
}

/// The first candidate square for `player` that completes a line under
/// No-Draw rules.
///
/// Each candidate is tried on a copy of the board with `player`'s oldest
/// mark already removed (when at capacity), so a line that relies on the
/// mark about to vanish does not count.
pub fn find_winning_move_no_draw(
    board: &Board,
    player: Player,
    history: &MoveHistory,
) -> Option<usize> {
    let evicted = history.oldest_if_full();
    candidates(board, history, player).into_iter().find(|&pos| {
        let mut sim = *board;
        if let Some(old) = evicted {
            sim.put(old, Square::Empty);
        }
        sim.put(pos, Square::Occupied(player));
        has_line(&sim, player)
    })
}

/// No-Draw rules: win, else block X's next-move win, else a random
/// candidate square.
///
/// A block is only taken when that square is one O may actually play.
#[instrument(skip(rng), fields(board = %board, x_history = ?x_history.as_slice(), o_history = ?o_history.as_slice()))]
pub fn choose_move_no_draw<R: Rng + ?Sized>(
    board: &Board,
    x_history: &MoveHistory,
    o_history: &MoveHistory,
    rng: &mut R,
) -> Option<usize> {
    let available = candidates(board, o_history, Player::O);
    if available.is_empty() {
        return None;
    }

    if let Some(pos) = find_winning_move_no_draw(board, Player::O, o_history) {
        debug!(pos, "Medium takes win");
        return Some(pos);
    }

    if let Some(pos) = find_winning_move_no_draw(board, Player::X, x_history) {
        if available.contains(&pos) {
            debug!(pos, "Medium blocks");
            return Some(pos);
        }
    }

    let choice = available.choose(rng).copied();
    debug!(?choice, "Medium plays randomly");
    choice
}

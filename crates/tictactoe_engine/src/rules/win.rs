//! Win detection logic for tic-tac-toe.
//!
//! These run at every node of the hard AI's search, so they stay
//! allocation-free.

use crate::types::{Board, Player, Square};

/// The 8 winning lines in canonical order: rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` owns all three squares of any line.
pub fn has_line(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// The first line, in canonical order, fully owned by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<[usize; 3]> {
    let squares = board.squares();
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&i| squares[i] == mark))
}

/// Checks if there is a winner on the board.
///
/// X is checked first; a well-formed game never has both.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_line(board, player))
}

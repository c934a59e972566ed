//! Legal squares for a position given on the command line.

use anyhow::{Context, Result};
use tictactoe_engine::{Board, MoveHistory, Player, RuleVariant, Snapshot};
use tracing::instrument;

/// The side to move when none is given: X unless X has more marks down.
pub fn infer_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Builds a snapshot from board notation and histories.
///
/// # Errors
///
/// Fails on bad board notation, on a history longer than three squares,
/// or on a history square outside 0-8.
#[instrument]
pub fn parse_position(
    board: &str,
    x_history: &[usize],
    o_history: &[usize],
    to_move: Option<Player>,
) -> Result<Snapshot> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let x_history = MoveHistory::from_slice(x_history).context("Invalid X history")?;
    let o_history = MoveHistory::from_slice(o_history).context("Invalid O history")?;
    let to_move = to_move.unwrap_or_else(|| infer_to_move(&board));
    Ok(Snapshot::new(board, x_history, o_history, to_move))
}

/// Legal squares (0-8) for the side to move.
pub fn legal_squares(snapshot: &Snapshot, variant: RuleVariant) -> Vec<usize> {
    snapshot.legal_moves(variant)
}

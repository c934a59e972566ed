//! Hard opponent, No-Draw rules: depth-limited alpha-beta.
//!
//! Marks disappear, so the tree never bottoms out on a full board. The
//! search carries both move histories down every branch, evicts the mover's
//! oldest mark where the rules would, and falls back to a line-threat
//! heuristic at the depth limit. A [`TranspositionTable`] lives for one
//! top-level call only.

use super::candidates;
use super::hard::WIN_SCORE;
use super::placement::Placement;
use crate::history::MoveHistory;
use crate::rules::{LINES, has_line};
use crate::types::{Board, NUM_SQUARES, Player};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// Search order: center, corners, edges.
pub const MOVE_PRIORITY: [usize; NUM_SQUARES] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Sorts squares by [`MOVE_PRIORITY`]. The sort is stable.
pub fn order_moves(moves: &mut [usize]) {
    moves.sort_by_key(|&pos| {
        MOVE_PRIORITY
            .iter()
            .position(|&p| p == pos)
            .unwrap_or(NUM_SQUARES)
    });
}

/// Ply limit for a search from `board`: shallower while the board is open.
pub fn dynamic_depth(board: &Board) -> i32 {
    match board.empty_count() {
        7.. => 4,
        5..=6 => 5,
        _ => 6,
    }
}

/// Line-threat balance from O's point of view.
///
/// Every line with O marks and no X mark adds its O count; every line with X
/// marks and no O mark subtracts its X count.
pub fn heuristic_score(board: &Board) -> i32 {
    let squares = board.squares();
    LINES
        .iter()
        .map(|line| {
            let o = line.iter().filter(|&&i| squares[i].is(Player::O)).count() as i32;
            let x = line.iter().filter(|&&i| squares[i].is(Player::X)).count() as i32;
            match (o, x) {
                (o, 0) => o,
                (0, x) => -x,
                _ => 0,
            }
        })
        .sum()
}

/// Legal squares for `player`, in search order.
fn ordered_candidates(board: &Board, history: &MoveHistory, player: Player) -> Vec<usize> {
    let mut moves = candidates(board, history, player);
    order_moves(&mut moves);
    moves
}

/// Canonical identity of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchKey {
    board: Board,
    x_history: MoveHistory,
    o_history: MoveHistory,
    maximizing: bool,
}

/// How a stored score relates to the true value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The true value.
    Exact,
    /// The search failed high; the value is at least this.
    Lower,
    /// The search failed low; the value is at most this.
    Upper,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    score: i32,
    depth: i32,
    bound: Bound,
}

/// Memo of scored nodes for a single top-level search.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<SearchKey, Entry>,
    hits: u64,
}

impl TranspositionTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A stored score usable at `depth` inside the window `(alpha, beta)`.
    fn probe(&mut self, key: &SearchKey, depth: i32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(key).filter(|e| e.depth == depth)?;
        let usable = match entry.bound {
            Bound::Exact => true,
            Bound::Lower => entry.score >= beta,
            Bound::Upper => entry.score <= alpha,
        };
        if usable {
            self.hits += 1;
            Some(entry.score)
        } else {
            None
        }
    }

    fn store(&mut self, key: SearchKey, score: i32, depth: i32, bound: Bound) {
        self.entries.insert(key, Entry { score, depth, bound });
    }
}

/// One top-level No-Draw search: its ply limit, table and node count.
#[derive(Debug)]
struct NoDrawSearch {
    table: TranspositionTable,
    max_depth: i32,
    nodes: u64,
}

impl NoDrawSearch {
    fn new(max_depth: i32) -> Self {
        Self {
            table: TranspositionTable::new(),
            max_depth,
            nodes: 0,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn score(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        x_history: MoveHistory,
        o_history: MoveHistory,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if has_line(board, Player::O) {
            return WIN_SCORE - depth;
        }
        if has_line(board, Player::X) {
            return depth - WIN_SCORE;
        }
        if depth >= self.max_depth {
            return heuristic_score(board);
        }

        let key = SearchKey {
            board: *board,
            x_history,
            o_history,
            maximizing,
        };
        if let Some(score) = self.table.probe(&key, depth, alpha, beta) {
            return score;
        }

        let (player, history) = if maximizing {
            (Player::O, o_history)
        } else {
            (Player::X, x_history)
        };
        let moves = ordered_candidates(board, &history, player);
        if moves.is_empty() {
            return heuristic_score(board);
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in moves {
            let (next_history, evicted) = history.with_push(pos);
            let evicted = evicted.filter(|&old| board.squares()[old].is(player));
            let mut placed = Placement::new(board, player, pos, evicted);

            let score = if has_line(&placed, player) {
                if maximizing {
                    WIN_SCORE - depth
                } else {
                    depth - WIN_SCORE
                }
            } else if maximizing {
                self.score(&mut placed, depth + 1, false, x_history, next_history, alpha, beta)
            } else {
                self.score(&mut placed, depth + 1, true, next_history, o_history, alpha, beta)
            };
            drop(placed);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        let bound = if best <= alpha_in {
            Bound::Upper
        } else if best >= beta_in {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.store(key, best, depth, bound);
        best
    }
}

/// Alpha-beta value of a No-Draw position from O's point of view, with a
/// full window and a fresh table.
///
/// `board` is used as scratch space and is unchanged on return.
pub fn minimax_no_draw(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    x_history: &MoveHistory,
    o_history: &MoveHistory,
    max_depth: i32,
) -> i32 {
    NoDrawSearch::new(max_depth).score(
        board,
        depth,
        maximizing,
        *x_history,
        *o_history,
        i32::MIN,
        i32::MAX,
    )
}

/// The first candidate (in search order) that completes a line for O.
fn immediate_win(board: &Board, o_history: &MoveHistory, moves: &[usize]) -> Option<usize> {
    let mut scratch = *board;
    let evicted = o_history
        .oldest_if_full()
        .filter(|&old| board.squares()[old].is(Player::O));
    moves.iter().copied().find(|&pos| {
        let placed = Placement::new(&mut scratch, Player::O, pos, evicted);
        has_line(&placed, Player::O)
    })
}

/// The best square for O under No-Draw rules, or `None` when O has no legal
/// square (only possible for an inconsistent position).
///
/// An immediate win is returned without searching. Otherwise every
/// candidate is scored and the highest wins; ties go to the earlier square
/// in [`MOVE_PRIORITY`] order.
#[instrument(fields(board = %board, x_history = ?x_history.as_slice(), o_history = ?o_history.as_slice()))]
pub fn choose_move(
    board: &Board,
    x_history: &MoveHistory,
    o_history: &MoveHistory,
) -> Option<usize> {
    let moves = ordered_candidates(board, o_history, Player::O);
    if moves.is_empty() {
        return None;
    }

    if let Some(pos) = immediate_win(board, o_history, &moves) {
        debug!(pos, "Hard takes immediate win");
        return Some(pos);
    }

    let max_depth = dynamic_depth(board);
    let mut search = NoDrawSearch::new(max_depth);
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for pos in moves {
        let (next_history, evicted) = o_history.with_push(pos);
        let evicted = evicted.filter(|&old| board.squares()[old].is(Player::O));
        let mut placed = Placement::new(&mut scratch, Player::O, pos, evicted);

        let score = if has_line(&placed, Player::O) {
            WIN_SCORE
        } else {
            let alpha = best.map_or(i32::MIN, |(_, s)| s);
            search.score(
                &mut placed,
                0,
                false,
                *x_history,
                next_history,
                alpha,
                i32::MAX,
            )
        };
        trace!(pos, score, "Scored candidate");

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    trace!(
        max_depth,
        nodes = search.nodes,
        table = search.table.len(),
        hits = search.table.hits,
        "No-Draw search finished"
    );
    debug!(choice = ?best, "Hard No-Draw move");
    best.map(|(pos, _)| pos)
}

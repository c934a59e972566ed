//! Easy opponent: a uniformly random legal move.

use super::candidates;
use crate::history::MoveHistory;
use crate::types::{Board, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// A random empty square, or `None` on a full board.
#[instrument(skip(rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let choice = board.empty_positions().choose(rng).copied();
    debug!(?choice, "Easy move");
    choice
}

/// A random legal square for O under No-Draw rules.
///
/// Besides the empty squares, O may reuse its oldest square once it has
/// three marks down, as long as the mark is still there.
#[instrument(skip(rng), fields(board = %board, o_history = ?o_history.as_slice()))]
pub fn choose_move_no_draw<R: Rng + ?Sized>(
    board: &Board,
    o_history: &MoveHistory,
    rng: &mut R,
) -> Option<usize> {
    let choice = candidates(board, o_history, Player::O).choose(rng).copied();
    debug!(?choice, "Easy No-Draw move");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_only_returns_empty_positions() {
        let board: Board = "XOX...OXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..200)
            .map(|_| choose_move(&board, &mut rng).unwrap())
            .collect();
        assert_eq!(seen, HashSet::from([3, 4, 5]));
    }

    #[test]
    fn test_returns_none_when_full() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_move(&board, &mut rng), None);
    }

    #[test]
    fn test_no_draw_includes_oldest_mark() {
        // O holds 0, 4, 7 (oldest 0); X holds 1, 2, 3.
        let board: Board = "OXXXO..O.".parse().unwrap();
        let history = MoveHistory::from_slice(&[0, 4, 7]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let seen: HashSet<_> = (0..300)
            .map(|_| choose_move_no_draw(&board, &history, &mut rng).unwrap())
            .collect();
        assert_eq!(seen, HashSet::from([0, 5, 6, 8]));
    }

    #[test]
    fn test_no_draw_skips_stale_oldest() {
        // History claims O's oldest is 1, but X sits there.
        let board: Board = "XXO.O....".parse().unwrap();
        let history = MoveHistory::from_slice(&[1, 2, 4]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let choice = choose_move_no_draw(&board, &history, &mut rng).unwrap();
            assert!(board.is_empty(choice));
        }
    }
}

//! Scoped trial placements on a scratch board.
//!
//! The searches explore by placing a mark, evaluating, and taking it back.
//! [`Placement`] does the taking back in `Drop`, so every exit path
//! (early return, `?`, panic unwinding) leaves the board as it found it.

use crate::types::{Board, Player, Square};
use std::ops::{Deref, DerefMut};

/// A mark placed on a borrowed board, undone when dropped.
pub struct Placement<'a> {
    board: &'a mut Board,
    player: Player,
    pos: usize,
    evicted: Option<usize>,
}

impl<'a> Placement<'a> {
    /// Clears `evicted` (the mover's oldest square, if any) and then places
    /// `player`'s mark on `pos`.
    ///
    /// `pos` must be empty once `evicted` is cleared.
    pub fn new(board: &'a mut Board, player: Player, pos: usize, evicted: Option<usize>) -> Self {
        if let Some(old) = evicted {
            board.put(old, Square::Empty);
        }
        board.put(pos, Square::Occupied(player));
        Self {
            board,
            player,
            pos,
            evicted,
        }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.put(self.pos, Square::Empty);
        if let Some(old) = self.evicted {
            self.board.put(old, Square::Occupied(self.player));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_on_drop() {
        let mut board: Board = "X...O....".parse().unwrap();
        {
            let placed = Placement::new(&mut board, Player::O, 8, None);
            assert_eq!(placed.to_string(), "X...O...O");
        }
        assert_eq!(board.to_string(), "X...O....");
    }

    #[test]
    fn test_undo_restores_evicted_mark() {
        let mut board: Board = "OX.O.X.O.".parse().unwrap();
        {
            let placed = Placement::new(&mut board, Player::O, 8, Some(0));
            assert_eq!(placed.to_string(), ".X.O.X.OO");
        }
        assert_eq!(board.to_string(), "OX.O.X.O.");
    }

    #[test]
    fn test_replacing_oldest_on_same_square() {
        let mut board: Board = "OX.O.X.O.".parse().unwrap();
        {
            let placed = Placement::new(&mut board, Player::O, 0, Some(0));
            assert_eq!(placed.to_string(), "OX.O.X.O.");
        }
        assert_eq!(board.to_string(), "OX.O.X.O.");
    }

    #[test]
    fn test_nested_placements_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut outer = Placement::new(&mut board, Player::O, 4, None);
            {
                let inner = Placement::new(&mut outer, Player::X, 0, None);
                assert_eq!(inner.to_string(), "X...O....");
            }
            assert_eq!(outer.to_string(), "....O....");
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_restored_after_panic() {
        let mut board: Board = "X........".parse().unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _placed = Placement::new(&mut board, Player::O, 4, None);
            panic!("search blew up");
        }));
        assert!(result.is_err());
        assert_eq!(board.to_string(), "X........");
    }
}

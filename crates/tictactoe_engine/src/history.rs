//! Per-player move history for the No-Draw variant.

use crate::types::NUM_SQUARES;
use serde::{Deserialize, Serialize};

/// Most marks a player may have on the board under No-Draw rules.
pub const MAX_MARKS: usize = 3;

/// Why a list of squares is not a valid move history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// More entries than a player can have on the board.
    #[display("A move history holds at most {} entries, got {}", MAX_MARKS, _0)]
    TooLong(usize),

    /// An entry that is not a square (valid squares are 0-8).
    #[display("History square {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for HistoryError {}

/// Bounded FIFO of the squares a player currently holds, oldest first.
///
/// Stored inline so search nodes can copy it freely. Unused slots are
/// always zero, which keeps the derived `Eq`/`Hash` faithful to the
/// live entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct MoveHistory {
    entries: [usize; MAX_MARKS],
    len: usize,
}

impl MoveHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from positions listed oldest first.
    ///
    /// # Errors
    ///
    /// Fails on more than [`MAX_MARKS`] entries or on an entry that is not
    /// a square.
    pub fn from_slice(moves: &[usize]) -> Result<Self, HistoryError> {
        if moves.len() > MAX_MARKS {
            return Err(HistoryError::TooLong(moves.len()));
        }
        if let Some(&pos) = moves.iter().find(|&&pos| pos >= NUM_SQUARES) {
            return Err(HistoryError::OutOfBounds(pos));
        }
        let mut history = Self::new();
        history.entries[..moves.len()].copy_from_slice(moves);
        history.len = moves.len();
        Ok(history)
    }

    /// Live entries, oldest first.
    pub fn as_slice(&self) -> &[usize] {
        &self.entries[..self.len]
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no moves are recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the next push will evict the oldest entry.
    pub fn is_full(&self) -> bool {
        self.len >= MAX_MARKS
    }

    /// The oldest entry, but only once the history is at capacity.
    ///
    /// This is the square the player's next move will vacate.
    pub fn oldest_if_full(&self) -> Option<usize> {
        if self.is_full() {
            Some(self.entries[0])
        } else {
            None
        }
    }

    /// Appends `pos`, evicting and returning the oldest entry when full.
    pub fn push(&mut self, pos: usize) -> Option<usize> {
        let evicted = if self.is_full() {
            let oldest = self.entries[0];
            self.entries.rotate_left(1);
            self.len -= 1;
            Some(oldest)
        } else {
            None
        };
        self.entries[self.len] = pos;
        self.len += 1;
        evicted
    }

    /// A copy with `pos` appended, plus whatever the push evicted.
    pub fn with_push(&self, pos: usize) -> (Self, Option<usize>) {
        let mut next = *self;
        let evicted = next.push(pos);
        (next, evicted)
    }
}

impl From<MoveHistory> for Vec<usize> {
    fn from(history: MoveHistory) -> Self {
        history.as_slice().to_vec()
    }
}

impl TryFrom<Vec<usize>> for MoveHistory {
    type Error = HistoryError;

    fn try_from(moves: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_slice(&moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_evicts_oldest_once_full() {
        let mut history = MoveHistory::new();
        assert_eq!(history.push(0), None);
        assert_eq!(history.push(2), None);
        assert_eq!(history.oldest_if_full(), None);
        assert_eq!(history.push(4), None);
        assert_eq!(history.oldest_if_full(), Some(0));
        assert_eq!(history.push(6), Some(0));
        assert_eq!(history.as_slice(), &[2, 4, 6]);
        assert_eq!(history.push(8), Some(2));
        assert_eq!(history.as_slice(), &[4, 6, 8]);
    }

    #[test]
    fn test_with_push_leaves_original_untouched() {
        let history = MoveHistory::from_slice(&[1, 2, 3]).unwrap();
        let (next, evicted) = history.with_push(1);
        assert_eq!(evicted, Some(1));
        assert_eq!(next.as_slice(), &[2, 3, 1]);
        assert_eq!(history.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_equal_entries_hash_equal_after_eviction() {
        use std::collections::HashSet;

        let mut rotated = MoveHistory::new();
        for pos in [0, 5, 6, 7] {
            rotated.push(pos);
        }
        let direct = MoveHistory::from_slice(&[5, 6, 7]).unwrap();
        assert_eq!(rotated, direct);

        let set: HashSet<_> = [rotated, direct].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_slice_rejects_overlong() {
        assert_eq!(
            MoveHistory::from_slice(&[0, 1, 2, 3]),
            Err(HistoryError::TooLong(4))
        );
    }

    #[test]
    fn test_from_slice_rejects_off_board_squares() {
        assert_eq!(
            MoveHistory::from_slice(&[12, 1, 2]),
            Err(HistoryError::OutOfBounds(12))
        );
        assert_eq!(
            MoveHistory::from_slice(&[9]),
            Err(HistoryError::OutOfBounds(9))
        );
        assert!(MoveHistory::from_slice(&[8, 0]).is_ok());
    }

    #[test]
    fn test_serde_as_list() {
        let history = MoveHistory::from_slice(&[3, 4]).unwrap();
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, "[3,4]");
        let back: MoveHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
        assert!(serde_json::from_str::<MoveHistory>("[0,1,2,3]").is_err());
        assert!(serde_json::from_str::<MoveHistory>("[0,12]").is_err());
    }
}

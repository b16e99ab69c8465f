// history.rs - Short ring of board hashes for spotting repeating states

use crate::grid::Board;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub const HISTORY_LEN: usize = 10;

/// Remembers the last [`HISTORY_LEN`] boards by hash.
#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

pub fn hash_board(board: &Board) -> u64 {
    let mut hasher = DefaultHasher::new();
    board.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `board`; true if it matches one of the remembered boards.
    /// A repeated board is not recorded again.
    pub fn observe(&mut self, board: &Board) -> bool {
        let hash = hash_board(board);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;
    use crate::rules::step;

    #[test]
    fn blinker_repeats_after_two_steps() {
        let dims = Dimensions::new(5, 5).unwrap();
        let mut board = Board::from_live_cells(dims, [(2, 1), (2, 2), (2, 3)]);
        let mut history = CycleDetector::new();
        assert!(!history.observe(&board));
        board = step(&board);
        assert!(!history.observe(&board));
        board = step(&board);
        assert!(history.observe(&board));
    }

    #[test]
    fn forgets_after_capacity() {
        let dims = Dimensions::new(1, 16).unwrap();
        let mut history = CycleDetector::new();
        let first = Board::from_live_cells(dims, [(0, 0)]);
        assert!(!history.observe(&first));
        for col in 1..=HISTORY_LEN as isize {
            assert!(!history.observe(&Board::from_live_cells(dims, [(0, col)])));
        }
        assert!(!history.observe(&first));
    }

    #[test]
    fn clear_forgets_everything() {
        let dims = Dimensions::new(2, 2).unwrap();
        let board = Board::new(dims);
        let mut history = CycleDetector::new();
        history.observe(&board);
        history.clear();
        assert!(!history.observe(&board));
    }
}

// coro.rs - Step the board with one cooperative tokio task per row
//
// Every task reads the same Arc'd snapshot and hands back its finished row,
// so the result is identical to rules::step.

use crate::error::StepError;
use crate::grid::Board;
use crate::rules;
use std::sync::Arc;
use tracing::trace;

/// Row coroutine: next states for `row_index`, yielding after every cell.
async fn process_row(row_index: usize, current: Arc<Board>) -> (usize, Vec<bool>) {
    let cols = current.dims().cols();
    let mut row_result = Vec::with_capacity(cols);
    for col in 0..cols {
        let (r, c) = (row_index as isize, col as isize);
        let count = rules::live_neighbors(&current, r, c);
        row_result.push(rules::next_state(current.is_alive(r, c), count));

        tokio::task::yield_now().await; // Cooperative yielding
    }
    (row_index, row_result)
}

/// One generation computed by spawning a task per row on the current runtime.
pub async fn step_rows(board: Arc<Board>) -> Result<Board, StepError> {
    let dims = board.dims();

    // Spawn all row coroutines at once so they interleave
    let handles: Vec<_> = (0..dims.rows())
        .map(|row| (row, tokio::spawn(process_row(row, Arc::clone(&board)))))
        .collect();

    let mut cells = vec![false; dims.len()];
    for (row, handle) in handles {
        let (row_index, completed_row) = handle
            .await
            .map_err(|source| StepError::Join { row, source })?;
        let start = row_index * dims.cols();
        cells[start..start + dims.cols()].copy_from_slice(&completed_row);
    }
    trace!(rows = dims.rows(), "row tasks joined");

    Ok(board.with_cells(cells))
}

/// Blocking front for [`step_rows`], owning the runtime the rows run on.
pub struct RowStepper {
    runtime: tokio::runtime::Runtime,
}

impl RowStepper {
    pub fn new() -> Result<Self, StepError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .thread_name("conway-rows")
            .enable_all()
            .build()
            .map_err(StepError::Runtime)?;
        Ok(Self { runtime })
    }

    pub fn step(&self, board: &Board) -> Result<Board, StepError> {
        let snapshot = Arc::new(board.clone());
        self.runtime.block_on(step_rows(snapshot))
    }
}

impl std::fmt::Debug for RowStepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowStepper").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;

    fn glider(rows: usize, cols: usize) -> Board {
        let dims = Dimensions::new(rows, cols).unwrap();
        Board::from_live_cells(dims, [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    #[tokio::test]
    async fn matches_pure_step() {
        let mut board = glider(7, 9);
        for _ in 0..12 {
            let expected = rules::step(&board);
            board = step_rows(Arc::new(board)).await.unwrap();
            assert_eq!(board, expected);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn matches_pure_step_on_many_threads() {
        let board = glider(16, 16);
        let stepped = step_rows(Arc::new(board.clone())).await.unwrap();
        assert_eq!(stepped, rules::step(&board));
    }

    #[test]
    fn blocking_stepper() {
        let stepper = RowStepper::new().unwrap();
        let board = glider(5, 5);
        assert_eq!(stepper.step(&board).unwrap(), rules::step(&board));
    }
}

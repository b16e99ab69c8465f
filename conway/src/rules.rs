// rules.rs - Conway's B3/S23 rule over a toroidal Moore neighborhood

use crate::grid::Board;

/// The 8 Moore-neighborhood deltas.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells among the 8 wrapped neighbors of `(row, col)`.
///
/// On grids narrower than 3 cells some offsets resolve to the same cell;
/// each offset is still counted once.
pub fn live_neighbors(board: &Board, row: isize, col: isize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| board.is_alive(row + dr, col + dc))
        .count() as u8
}

/// Next state of a single cell.
#[rustfmt::skip]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// One generation. Every cell reads the same prior snapshot; the result is
/// a fresh board of identical dimensions.
pub fn step(board: &Board) -> Board {
    let dims = board.dims();
    let cells = board
        .cells()
        .iter()
        .enumerate()
        .map(|(i, &alive)| {
            let (row, col) = dims.coords(i);
            next_state(alive, live_neighbors(board, row as isize, col as isize))
        })
        .collect();
    board.with_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dimensions;

    fn dims(rows: usize, cols: usize) -> Dimensions {
        Dimensions::new(rows, cols).unwrap()
    }

    /// Board with a centre cell in `alive` state and `n` live neighbors.
    fn centre_with_neighbors(alive: bool, n: usize) -> Board {
        let mut live: Vec<(isize, isize)> = NEIGHBOR_OFFSETS
            .iter()
            .take(n)
            .map(|&(dr, dc)| (2 + dr, 2 + dc))
            .collect();
        if alive {
            live.push((2, 2));
        }
        Board::from_live_cells(dims(5, 5), live)
    }

    #[test]
    fn live_cell_survives_only_on_two_or_three() {
        for n in 0..=8 {
            let next = step(&centre_with_neighbors(true, n));
            assert_eq!(next.is_alive(2, 2), n == 2 || n == 3, "{n} neighbors");
        }
    }

    #[test]
    fn dead_cell_born_only_on_three() {
        for n in 0..=8 {
            let next = step(&centre_with_neighbors(false, n));
            assert_eq!(next.is_alive(2, 2), n == 3, "{n} neighbors");
        }
    }

    #[test]
    fn neighbors_wrap_top_to_bottom() {
        let d = dims(6, 4);
        for c in 0..4 {
            let board = Board::from_live_cells(d, [(5, c)]);
            assert_eq!(live_neighbors(&board, 0, c), 1);
            let board = Board::from_live_cells(d, [(0, c)]);
            assert_eq!(live_neighbors(&board, 5, c), 1);
        }
    }

    #[test]
    fn neighbors_wrap_corners() {
        let board = Board::from_live_cells(dims(4, 4), [(3, 3)]);
        assert_eq!(live_neighbors(&board, 0, 0), 1);
    }

    #[test]
    fn all_dead_stays_dead() {
        let board = Board::new(dims(7, 9));
        assert!(step(&board).is_empty());
    }

    #[test]
    fn step_is_deterministic() {
        let board = Board::from_live_cells(dims(6, 6), [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(step(&board), step(&board));
    }
}

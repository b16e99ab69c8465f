// grid.rs - Board types for Conway's Game of Life
//
// The board is a flat row-major Vec<bool> on a torus: every (row, col) pair,
// negative or past the edge, wraps back onto the grid.

use crate::error::GridError;
use rand::Rng;
use std::fmt;

/// Grid size in rows and columns. Both are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Like [`Dimensions::new`] but raises zero sizes to 1.
    pub fn at_least_one(rows: usize, cols: usize) -> Self {
        Self { rows: rows.max(1), cols: cols.max(1) }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Flat index of `(row, col)` after toroidal wraparound.
    ///
    /// Periodic in `row` with period `rows` and in `col` with period `cols`;
    /// always lands in `0..rows * cols`.
    pub fn index(&self, row: isize, col: isize) -> usize {
        let r = row.rem_euclid(self.rows as isize) as usize;
        let c = col.rem_euclid(self.cols as isize) as usize;
        r * self.cols + c
    }

    /// Inverse of [`Dimensions::index`] for in-range flat indices.
    pub const fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Immutable snapshot of the grid. Every operation that changes cells
/// returns a new `Board`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dimensions,
    cells: Vec<bool>,
}

impl Board {
    /// All-dead board.
    pub fn new(dims: Dimensions) -> Self {
        Self { dims, cells: vec![false; dims.len()] }
    }

    /// Board built from live `(row, col)` coordinates, wrapped onto the torus.
    pub fn from_live_cells<I>(dims: Dimensions, live: I) -> Self
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let mut cells = vec![false; dims.len()];
        for (row, col) in live {
            cells[dims.index(row, col)] = true;
        }
        Self { dims, cells }
    }

    /// Board from a row-major cell vector; `None` when the length is wrong.
    #[cfg(test)]
    pub(crate) fn from_cells(dims: Dimensions, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == dims.len()).then_some(Self { dims, cells })
    }

    /// Each cell alive with probability `density`.
    pub fn random<R: Rng + ?Sized>(dims: Dimensions, rng: &mut R, density: f64) -> Self {
        let cells = (0..dims.len()).map(|_| rng.gen_bool(density)).collect();
        Self { dims, cells }
    }

    /// Same dimensions, new cells. Callers build `cells` from this board.
    pub(crate) fn with_cells(&self, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), self.cells.len());
        Self { dims: self.dims, cells }
    }

    pub const fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_alive(&self, row: isize, col: isize) -> bool {
        self.cells[self.dims.index(row, col)]
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Live cells as `(row, col)` in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| self.dims.coords(i))
    }

    /// Copy with the addressed cell inverted.
    pub fn toggled(&self, row: isize, col: isize) -> Self {
        let mut cells = self.cells.clone();
        let i = self.dims.index(row, col);
        cells[i] = !cells[i];
        Self { dims: self.dims, cells }
    }

    /// Copy with every listed cell set alive. Existing live cells stay alive.
    pub fn with_live<I>(&self, live: I) -> Self
    where
        I: IntoIterator<Item = (isize, isize)>,
    {
        let mut cells = self.cells.clone();
        for (row, col) in live {
            cells[self.dims.index(row, col)] = true;
        }
        Self { dims: self.dims, cells }
    }

    /// Regenerated board of new dimensions. Cells whose flat index exists in
    /// both boards keep their state, the rest start dead.
    pub fn resized(&self, dims: Dimensions) -> Self {
        let mut cells = vec![false; dims.len()];
        let kept = cells.len().min(self.cells.len());
        cells[..kept].copy_from_slice(&self.cells[..kept]);
        Self { dims, cells }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dims.cols) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// patterns.rs - Predefined shapes and the edge pattern stamper

use crate::grid::{Board, Dimensions};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// A static shape. Offsets are relative to the top-left corner of the
/// bounding box, so the smallest row and column offsets are both 0.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r as usize + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c as usize + 1).max().unwrap_or(0)
    }

    /// Whether the bounding box fits inside the grid without wrapping.
    pub fn fits(&self, dims: Dimensions) -> bool {
        self.height() <= dims.rows() && self.width() <= dims.cols()
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const LINE: Pattern = Pattern {
    name: "Line",
    cells: &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
};

#[rustfmt::skip]
pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        // Bottom half (mirrored)
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

#[rustfmt::skip]
pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (2, 12), (2, 13), (3, 11), (3, 15), (4, 10), (4, 16), (5, 10), (5, 14),
        (5, 16), (5, 17), (6, 10), (6, 16), (7, 11), (7, 15), (8, 12), (8, 13),
        (0, 24), (1, 22), (1, 24), (2, 20), (2, 21), (3, 20), (3, 21), (4, 20),
        (4, 21), (5, 22), (5, 24), (6, 24),
        (2, 34), (2, 35), (3, 34), (3, 35),
    ],
};

/// Everything offered by the pattern picker.
pub const PATTERNS: &[Pattern] = &[
    GLIDER, BLINKER, LINE, BLOCK, TOAD, BEACON, PULSAR, R_PENTOMINO, GOSPER_GLIDER_GUN,
];

/// Shapes injected by the idle stamper.
pub const IDLE_PATTERNS: &[Pattern] = &[BLINKER, LINE, BLOCK, GLIDER, TOAD, BEACON];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Where and what the stamper is about to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pattern: &'static Pattern,
    pub edge: Edge,
    pub anchor: (usize, usize),
}

/// Largest value of the free coordinate along `edge`: a column for
/// top/bottom, a row for left/right. `None` when the pattern does not fit.
pub fn free_span(dims: Dimensions, pattern: &Pattern, edge: Edge) -> Option<usize> {
    if !pattern.fits(dims) {
        return None;
    }
    Some(match edge {
        Edge::Top | Edge::Bottom => dims.cols() - pattern.width(),
        Edge::Left | Edge::Right => dims.rows() - pattern.height(),
    })
}

/// Anchor flush against `edge` with the free coordinate clamped in range.
#[rustfmt::skip]
pub fn anchor_for(dims: Dimensions, pattern: &Pattern, edge: Edge, free: usize) -> Option<(usize, usize)> {
    let free = free.min(free_span(dims, pattern, edge)?);
    let bottom = dims.rows() - pattern.height();
    let right = dims.cols() - pattern.width();
    Some(match edge {
        Edge::Top    => (0, free),
        Edge::Bottom => (bottom, free),
        Edge::Left   => (free, 0),
        Edge::Right  => (free, right),
    })
}

/// Anchor that puts the pattern's bounding box in the middle of the grid.
/// Oversized patterns get a negative anchor and wrap.
pub fn centered(dims: Dimensions, pattern: &Pattern) -> (isize, isize) {
    (
        (dims.rows() as isize - pattern.height() as isize) / 2,
        (dims.cols() as isize - pattern.width() as isize) / 2,
    )
}

/// Copy of `board` with the pattern's cells set alive at `anchor + offset`.
pub fn stamp(board: &Board, pattern: &Pattern, anchor: (isize, isize)) -> Board {
    let (ar, ac) = anchor;
    board.with_live(pattern.cells.iter().map(|&(r, c)| (ar + r, ac + c)))
}

/// Uniform pattern, uniform edge, uniform free coordinate.
pub fn random_placement<R: Rng + ?Sized>(dims: Dimensions, rng: &mut R) -> Option<Placement> {
    let pattern = IDLE_PATTERNS.choose(rng)?;
    let edge = *Edge::ALL.choose(rng)?;
    let span = free_span(dims, pattern, edge)?;
    let anchor = anchor_for(dims, pattern, edge, rng.gen_range(0..=span))?;
    Some(Placement { pattern, edge, anchor })
}

/// One idle injection. The board comes back unchanged when the chosen
/// pattern is larger than the grid.
pub fn stamp_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Board {
    match random_placement(board.dims(), rng) {
        Some(Placement { pattern, edge, anchor: (row, col) }) => {
            debug!(pattern = pattern.name, ?edge, row, col, "stamping pattern");
            stamp(board, pattern, (row as isize, col as isize))
        }
        None => {
            debug!(dims = %board.dims(), "grid too small for pattern, skipping stamp");
            board.clone()
        }
    }
}

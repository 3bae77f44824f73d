#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use std::collections::HashSet;

use log::debug;

use crate::components::{BlockCoordinate, Grid};

/// Outcome of one clear sweep: the deduplicated set of cells that were
/// zeroed, and how many full lines (rows + columns) produced them.
#[derive(Debug, Clone, Default)]
pub struct SweepResult {
    pub cleared: HashSet<BlockCoordinate>,
    pub lines: u32,
}

impl SweepResult {
    #[must_use]
    pub fn blocks(&self) -> u32 {
        self.cleared.len() as u32
    }
}

/// Detect every full row and full column, then zero the union of their cells
/// in one pass. A cell on the intersection of a full row and a full column is
/// collected once. The caller sees no partially cleared state.
pub fn sweep(grid: &mut Grid) -> SweepResult {
    let mut cleared = HashSet::new();
    let mut lines = 0u32;

    for y in 0..grid.rows() {
        let full = (0..grid.cols()).all(|x| grid.get(x as i32, y as i32) > 0);
        if full {
            lines += 1;
            for x in 0..grid.cols() {
                cleared.insert(BlockCoordinate::new(x, y));
            }
            debug!("row {y} is full and will be cleared");
        }
    }

    for x in 0..grid.cols() {
        let full = (0..grid.rows()).all(|y| grid.get(x as i32, y as i32) > 0);
        if full {
            lines += 1;
            for y in 0..grid.rows() {
                cleared.insert(BlockCoordinate::new(x, y));
            }
            debug!("column {x} is full and will be cleared");
        }
    }

    for coordinate in &cleared {
        grid.set(coordinate.x, coordinate.y, 0);
    }

    SweepResult { cleared, lines }
}

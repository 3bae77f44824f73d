#![warn(clippy::all, clippy::pedantic)]

pub mod highscores_tests;
pub mod runner_tests;
pub mod scoring_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use bevy_ecs::prelude::*;

    use crate::components::{Counters, Grid, Piece, PieceQueue};
    use crate::game::{GRID_COLS, GRID_ROWS};

    // Catalog indices used throughout the tests
    pub const LINE: usize = 0;
    pub const PLUS: usize = 2;
    pub const DOT: usize = 3;
    pub const L_SHAPE: usize = 5;

    // Helper function to create a test world with a deterministic queue
    #[must_use]
    pub fn create_test_world() -> World {
        let mut world = World::new();
        world.insert_resource(Grid::new(GRID_COLS, GRID_ROWS));
        world.insert_resource(Counters::default());
        world.insert_resource(PieceQueue::from_slots(
            Piece::from_index(DOT),
            Piece::from_index(LINE),
            Piece::from_index(PLUS),
        ));
        world
    }

    // Fill an entire row with the given value
    pub fn fill_row(grid: &mut Grid, y: usize, value: u8) {
        for x in 0..grid.cols() {
            grid.set(x, y, value);
        }
    }

    // Fill an entire column with the given value
    pub fn fill_column(grid: &mut Grid, x: usize, value: u8) {
        for y in 0..grid.rows() {
            grid.set(x, y, value);
        }
    }
}

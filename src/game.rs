#![warn(clippy::all, clippy::pedantic)]

// Default grid dimensions
pub const GRID_COLS: usize = 5;
pub const GRID_ROWS: usize = 5;

// Size of the piece catalog; cell values run 1..=PIECES
pub const PIECES: usize = 15;

// How many redraws the queue attempts per slot before accepting a duplicate
// catalog index
pub const SPAWN_RETRY_LIMIT: usize = 8;

// Scoring
pub const POINTS_PER_BLOCK: u32 = 10; // per cleared block, per cleared line
pub const SCORE_PER_LEVEL: u32 = 1000; // level is score / SCORE_PER_LEVEL

// Lives and streak bonus
pub const STARTING_LIVES: u32 = 3;
pub const STARTING_MULTIPLIER: u32 = 1;

// Game-loop timer: the placement window shrinks with level down to a floor
pub const BASE_DELAY_MS: u64 = 12_000;
pub const DELAY_STEP_MS: u64 = 500;
pub const MIN_DELAY_MS: u64 = 2_500;

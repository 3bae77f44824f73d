#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since grid dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::game::{PIECES, SPAWN_RETRY_LIMIT, STARTING_LIVES, STARTING_MULTIPLIER};

/// Base shapes of the catalog, written row by row (`pattern[y][x]`).
/// A `1` marks a block; the colour value is stamped in when the masks are
/// built, so every piece carries `index + 1` in its occupied cells.
const BASE_PATTERNS: [(&str, [[u8; 3]; 3]); PIECES] = [
    ("Line", [[0, 0, 0], [1, 1, 1], [0, 0, 0]]),
    ("C", [[1, 1, 0], [1, 0, 0], [1, 1, 0]]),
    ("Plus", [[0, 1, 0], [1, 1, 1], [0, 1, 0]]),
    ("Dot", [[0, 0, 0], [0, 1, 0], [0, 0, 0]]),
    ("Square", [[1, 1, 0], [1, 1, 0], [0, 0, 0]]),
    ("L", [[1, 0, 0], [1, 0, 0], [1, 1, 0]]),
    ("J", [[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
    ("S", [[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    ("Z", [[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
    ("T", [[1, 1, 1], [0, 1, 0], [0, 0, 0]]),
    ("X", [[1, 0, 1], [0, 1, 0], [1, 0, 1]]),
    ("Corner", [[1, 1, 0], [1, 0, 0], [0, 0, 0]]),
    ("Diagonal", [[1, 0, 0], [0, 1, 0], [0, 0, 1]]),
    ("Domino", [[0, 1, 0], [0, 1, 0], [0, 0, 0]]),
    ("U", [[1, 0, 1], [1, 1, 1], [0, 0, 0]]),
];

/// Colour-stamped masks in grid orientation (`mask[x][y]`).
static MASKS: Lazy<[[[u8; 3]; 3]; PIECES]> = Lazy::new(|| {
    let mut masks = [[[0u8; 3]; 3]; PIECES];
    for (index, (_, pattern)) in BASE_PATTERNS.iter().enumerate() {
        for x in 0..3 {
            for y in 0..3 {
                if pattern[y][x] != 0 {
                    masks[index][x][y] = (index + 1) as u8;
                }
            }
        }
    }
    masks
});

/// One piece from the fixed catalog, at some rotation.
///
/// Equality compares the catalog index only; two instances of the same shape
/// at different rotations are equal. The queue relies on this for its
/// duplicate checks.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    index: usize,
    rotation: usize,
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Piece {}

impl Piece {
    /// Create the catalog piece at rotation 0.
    ///
    /// # Panics
    /// An out-of-range index is a programmer error, not a gameplay condition.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < PIECES, "piece index {index} outside catalog 0..{PIECES}");
        Self { index, rotation: 0 }
    }

    /// Draw a uniformly random catalog piece.
    #[must_use]
    pub fn random() -> Self {
        Self::from_index(fastrand::usize(0..PIECES))
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        BASE_PATTERNS[self.index].0
    }

    #[must_use]
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// The non-zero value this piece writes into the grid.
    #[must_use]
    pub fn value(&self) -> u8 {
        (self.index + 1) as u8
    }

    /// The 3x3 mask at the current rotation, indexed `[x][y]`.
    #[must_use]
    pub fn blocks(&self) -> [[u8; 3]; 3] {
        let mut mask = MASKS[self.index];
        for _ in 0..self.rotation {
            mask = rotate_mask(mask);
        }
        mask
    }

    /// Rotate by a single quarter turn.
    pub fn rotate(&mut self) {
        self.rotate_by(1);
    }

    /// Rotate by `steps` quarter turns (mod 4).
    pub fn rotate_by(&mut self, steps: usize) {
        self.rotation = (self.rotation + steps) % 4;
        trace!("piece {} rotated to {}", self.name(), self.rotation);
    }
}

/// Quarter-turn of a 3x3 mask; four applications are the identity and the
/// multiset of non-zero values is preserved.
fn rotate_mask(mask: [[u8; 3]; 3]) -> [[u8; 3]; 3] {
    let mut out = [[0u8; 3]; 3];
    for x in 0..3 {
        for y in 0..3 {
            out[x][y] = mask[y][2 - x];
        }
    }
    out
}

/// An immutable grid cell coordinate, used as a set element in clear
/// notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockCoordinate {
    pub x: usize,
    pub y: usize,
}

impl BlockCoordinate {
    #[must_use]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The occupancy model of the board: `cols x rows` cells, `0` empty,
/// `1..=PIECES` a colour value. Cells are indexed `cells[x][y]`.
#[derive(Resource, Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<u8>>,
}

impl Grid {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![0; rows]; cols],
        }
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell value at `(x, y)`, or `-1` when the coordinate is out of bounds.
    /// Never panics.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> i32 {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return -1;
        }
        i32::from(self.cells[x as usize][y as usize])
    }

    /// Unconditional write; callers guarantee bounds and value range.
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        self.cells[x][y] = value;
    }

    pub fn clear(&mut self) {
        for column in &mut self.cells {
            column.fill(0);
        }
    }

    /// Whether `piece` fits with its mask centre anchored at `(x, y)`:
    /// every occupied mask cell must map to a free, in-bounds grid cell.
    #[must_use]
    pub fn can_play(&self, piece: &Piece, x: i32, y: i32) -> bool {
        let blocks = piece.blocks();
        for (bx, column) in blocks.iter().enumerate() {
            for (by, &value) in column.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                // The anchor is the mask centre, not its corner
                let gx = x - 1 + bx as i32;
                let gy = y - 1 + by as i32;
                if gx < 0
                    || gx >= self.cols as i32
                    || gy < 0
                    || gy >= self.rows as i32
                    || self.get(gx, gy) != 0
                {
                    trace!("block of {} blocked at ({gx},{gy})", piece.name());
                    return false;
                }
            }
        }
        true
    }

    /// Commit `piece` at anchor `(x, y)`. Returns `false` and leaves the grid
    /// untouched when the placement is invalid.
    pub fn play(&mut self, piece: &Piece, x: i32, y: i32) -> bool {
        if !self.can_play(piece, x, y) {
            debug!("cannot place {} at ({x},{y})", piece.name());
            return false;
        }
        let blocks = piece.blocks();
        for (bx, column) in blocks.iter().enumerate() {
            for (by, &value) in column.iter().enumerate() {
                if value != 0 {
                    let gx = (x - 1 + bx as i32) as usize;
                    let gy = (y - 1 + by as i32) as usize;
                    self.set(gx, gy, value);
                }
            }
        }
        debug!("placed {} at ({x},{y})", piece.name());
        true
    }
}

/// The three-slot lookahead queue. `current` is the playable piece, `next`
/// the visible preview, `following` the hidden buffer that refills `next`.
/// All slots are populated from construction onwards.
#[derive(Resource, Debug, Clone)]
pub struct PieceQueue {
    current: Piece,
    next: Piece,
    following: Piece,
}

impl PieceQueue {
    /// Draw three pieces, redrawing on catalog-index collisions so the player
    /// starts with three distinct shapes. Redraws are bounded; on exhaustion
    /// the duplicate is kept.
    #[must_use]
    pub fn new() -> Self {
        let current = Piece::random();
        let next = Self::draw_distinct(&[current]);
        let following = Self::draw_distinct(&[current, next]);
        debug!(
            "queue initialised: {} / {} / {}",
            current.name(),
            next.name(),
            following.name()
        );
        Self {
            current,
            next,
            following,
        }
    }

    /// Build a queue with explicit slots, for deterministic replays and tests.
    #[must_use]
    pub fn from_slots(current: Piece, next: Piece, following: Piece) -> Self {
        Self {
            current,
            next,
            following,
        }
    }

    fn draw_distinct(taken: &[Piece]) -> Piece {
        let mut piece = Piece::random();
        for _ in 0..SPAWN_RETRY_LIMIT {
            if !taken.contains(&piece) {
                break;
            }
            piece = Piece::random();
        }
        piece
    }

    #[must_use]
    pub fn current(&self) -> Piece {
        self.current
    }

    #[must_use]
    pub fn next(&self) -> Piece {
        self.next
    }

    #[must_use]
    pub fn following(&self) -> Piece {
        self.following
    }

    /// Rotate the queue: the preview becomes playable, the buffer becomes the
    /// preview, and a fresh random piece refills the buffer.
    pub fn advance(&mut self) {
        self.current = self.next;
        self.next = self.following;
        self.following = Piece::random();
        debug!(
            "queue advanced: {} / {} / {}",
            self.current.name(),
            self.next.name(),
            self.following.name()
        );
    }

    /// Exchange the two visible slots (playable and preview).
    pub fn swap_visible(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Rotate the playable piece in place by `steps` quarter turns.
    pub fn rotate_current(&mut self, steps: usize) {
        self.current.rotate_by(steps);
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// The four observable counters. The engine owns the only mutable reference;
/// the outside world reads them through `GameLoop` accessors and counter
/// change notifications.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Counters {
    pub score: u32,
    pub level: u32,
    pub lives: u32,
    pub multiplier: u32,
}

impl Counters {
    #[must_use]
    pub fn new(lives: u32) -> Self {
        Self {
            score: 0,
            level: 0,
            lives,
            multiplier: STARTING_MULTIPLIER,
        }
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}

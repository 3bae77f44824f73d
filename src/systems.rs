#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::clear::{self, SweepResult};
use crate::components::{Counters, Grid, Piece, PieceQueue};
use crate::scoring;

/// Populate the queue resource and return the two visible slots for the
/// initial announcement.
pub fn initialise_queue(world: &mut World) -> (Piece, Piece) {
    let queue = PieceQueue::new();
    let visible = (queue.current(), queue.next());
    world.insert_resource(queue);
    visible
}

/// Attempt to commit the playable piece at anchor `(x, y)`.
///
/// On success the queue advances, the grid is swept for full lines and the
/// counters are updated; the sweep result is returned so the caller can fan
/// out notifications. On an invalid placement nothing changes and `None` is
/// returned.
pub fn place_piece(world: &mut World, x: i32, y: i32) -> Option<SweepResult> {
    let piece = world.resource::<PieceQueue>().current();

    let placed = {
        let mut grid = world.resource_mut::<Grid>();
        grid.play(&piece, x, y)
    };
    if !placed {
        debug!("placement of {} rejected at ({x},{y})", piece.name());
        return None;
    }

    {
        let mut queue = world.resource_mut::<PieceQueue>();
        queue.advance();
    }

    let sweep = {
        let mut grid = world.resource_mut::<Grid>();
        clear::sweep(&mut grid)
    };

    {
        let mut counters = world.resource_mut::<Counters>();
        scoring::apply_sweep(&mut counters, sweep.lines, sweep.blocks());
    }

    Some(sweep)
}

/// Handle an elapsed placement window: burn a life, reset the streak and
/// discard the playable piece by advancing the queue. Returns the remaining
/// lives.
pub fn timeout_tick(world: &mut World) -> u32 {
    let lives = {
        let mut counters = world.resource_mut::<Counters>();
        counters.lives = counters.lives.saturating_sub(1);
        scoring::reset_multiplier(&mut counters);
        counters.lives
    };
    info!("placement window elapsed, {lives} lives left");

    let mut queue = world.resource_mut::<PieceQueue>();
    queue.advance();

    lives
}

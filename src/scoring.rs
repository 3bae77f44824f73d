#![warn(clippy::all, clippy::pedantic)]

use log::{debug, info};

use crate::components::Counters;
use crate::game::{
    BASE_DELAY_MS, DELAY_STEP_MS, MIN_DELAY_MS, POINTS_PER_BLOCK, SCORE_PER_LEVEL,
    STARTING_MULTIPLIER,
};

/// Apply one placement's sweep outcome to the counters.
///
/// A clearing placement scores `lines * blocks * 10 * multiplier` using the
/// streak multiplier as it stood before this placement, then bumps the
/// multiplier. A non-clearing placement scores nothing and resets the streak.
/// The level is score / 1000, so it only ever rises.
pub fn apply_sweep(counters: &mut Counters, lines: u32, blocks: u32) {
    if lines == 0 {
        counters.multiplier = STARTING_MULTIPLIER;
        return;
    }

    let delta = lines * blocks * POINTS_PER_BLOCK * counters.multiplier;
    counters.score += delta;
    counters.multiplier += 1;
    debug!("score +{delta} -> {}", counters.score);

    let level = counters.score / SCORE_PER_LEVEL;
    if level != counters.level {
        counters.level = level;
        info!("level up -> {level}");
    }
}

/// Reset the streak multiplier, as happens on a timeout.
pub fn reset_multiplier(counters: &mut Counters) {
    counters.multiplier = STARTING_MULTIPLIER;
}

/// Placement window for a level using the default curve.
#[must_use]
pub fn timer_delay_ms(level: u32) -> u64 {
    delay_ms(level, BASE_DELAY_MS, DELAY_STEP_MS, MIN_DELAY_MS)
}

/// Placement window for a level: `base - step * level`, floored at `min`.
#[must_use]
pub fn delay_ms(level: u32, base: u64, step: u64, min: u64) -> u64 {
    base.saturating_sub(step.saturating_mul(u64::from(level))).max(min)
}

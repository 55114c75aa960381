//! Obstacle spawning and cadence
//!
//! The spawn interval is the sole density knob: it tightens by a fixed step
//! after every emission and clamps at a strictly positive floor,
//! independent of the game speed that moves obstacles once they exist.

use rand::Rng;

use super::state::{GameState, Obstacle, ObstacleKind};
use crate::consts::TICK_MS;

/// Advance the spawn clock by one tick and emit an obstacle once the
/// interval budget elapses. Kind is drawn uniformly from the session RNG;
/// geometry is fixed per kind and placement is at the right viewport edge.
pub fn maybe_spawn(state: &mut GameState) {
    state.spawn_clock_ms += TICK_MS;
    if state.spawn_clock_ms < state.spawn_interval_ms {
        return;
    }
    state.spawn_clock_ms = 0.0;

    let kind = ObstacleKind::ALL[state.rng.random_range(0..ObstacleKind::ALL.len())];
    state.obstacles.push(Obstacle::spawn(kind));

    // Tighten the cadence after each emission, clamped at the floor
    state.spawn_interval_ms = (state.spawn_interval_ms - state.tuning.spawn_interval_step_ms)
        .max(state.tuning.spawn_interval_floor_ms);

    log::debug!(
        "spawned {:?}, next interval {:.0}ms",
        kind,
        state.spawn_interval_ms
    );
}

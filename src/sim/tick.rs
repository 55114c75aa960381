//! Fixed timestep session tick
//!
//! One logical frame: apply intents, step player physics, spawn, move and
//! retire obstacles, resolve collisions, then score and difficulty. The
//! fall sequence is a sub-state advanced by this same function, so the
//! orchestrator stays the single driver of ticks.

use super::collision::{self, CollisionOutcome};
use super::spawn;
use super::state::{FallSequence, GamePhase, GameState, Posture};
use crate::consts::PLAYER_RADIUS;
use crate::wrap_degrees;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump (edge-triggered)
    pub jump: bool,
    /// Duck hold (level-triggered; false is the release)
    pub duck: bool,
    /// Restart (edge-triggered, honored only at game over)
    pub restart: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        if input.restart {
            log::info!("restarting after a {}-point run", state.score);
            state.reset();
        }
        return;
    }

    // The fall sequence freezes score, speed, spawns, and obstacle motion
    if state.player.posture == Posture::Falling {
        advance_fall(state);
        return;
    }

    state.time_ticks += 1;

    // Apply intents; invalid ones are no-ops inside the player FSM
    if input.jump {
        state.player.jump();
    }
    if input.duck {
        state.player.duck();
    } else {
        state.player.release_duck();
    }

    state.player.step_physics(state.tuning.gravity);

    spawn::maybe_spawn(state);

    // Move obstacles, then retire the ones that left the viewport so an
    // off-screen obstacle can never collide
    let speed = state.game_speed;
    for obstacle in &mut state.obstacles {
        obstacle.advance(speed);
    }
    state.obstacles.retain(|o| !o.is_off_screen());

    // Resolve in creation order; the first non-miss latches the tick
    let mut latched = None;
    for obstacle in &state.obstacles {
        match collision::resolve(&state.player, obstacle) {
            CollisionOutcome::Miss => {}
            outcome => {
                latched = Some((outcome, obstacle.center_x()));
                break;
            }
        }
    }
    match latched {
        Some((CollisionOutcome::Blocking, _)) => {
            log::info!("blocked at {} points", state.score);
            state.phase = GamePhase::GameOver;
            return;
        }
        Some((CollisionOutcome::FallThrough, hole_center_x)) => {
            log::info!("fell into a hole at {} points", state.score);
            state.player.posture = Posture::Falling;
            state.fall = Some(FallSequence::begin(
                state.player.pos.x,
                hole_center_x,
                &state.tuning,
            ));
            return;
        }
        _ => {}
    }

    state.score += 1;

    // Difficulty checkpoint: faster scroll, proportionally stronger jumps
    if state.score % state.tuning.speed_checkpoint == 0 && state.game_speed < state.tuning.max_speed
    {
        state.game_speed = (state.game_speed + state.tuning.speed_step).min(state.tuning.max_speed);
        state.player.jump_impulse = (state.player.jump_impulse
            - state.tuning.jump_impulse_step)
            .min(state.tuning.jump_impulse);
    }
}

/// One tick of the bounded fall sub-simulation: gravity up to terminal
/// velocity, capped horizontal pull toward the hole center, faster spin,
/// and a linear shrink over the second half of the duration.
fn advance_fall(state: &mut GameState) {
    let tuning = state.tuning;
    let Some(fall) = state.fall.as_mut() else {
        // Falling posture without a sequence cannot progress; end the run
        state.phase = GamePhase::GameOver;
        return;
    };

    fall.velocity = (fall.velocity + tuning.fall_gravity).min(tuning.fall_terminal_velocity);
    state.player.pos.y += fall.velocity;

    let offset = fall.target_x - state.player.pos.x;
    if offset.abs() > fall.closing_speed {
        state.player.pos.x += fall.closing_speed * offset.signum();
    }

    state.player.rotation = wrap_degrees(state.player.rotation + tuning.fall_rotation_step);

    fall.ticks += 1;
    let half = tuning.fall_duration_ticks / 2;
    if fall.ticks > half {
        let progress = (fall.ticks - half) as f32 / half.max(1) as f32;
        state.player.radius = PLAYER_RADIUS * (1.0 - progress * (1.0 - tuning.fall_shrink_min));
    }

    if fall.ticks >= tuning.fall_duration_ticks {
        log::info!("run over; final score {}", state.score);
        state.phase = GamePhase::GameOver;
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::consts::GROUND_LINE;
    use proptest::prelude::*;

    proptest! {
        /// Speed never decreases or exceeds its cap, the spawn cadence
        /// never loosens or drops below its floor, and the player never
        /// sinks below the ground while not falling.
        #[test]
        fn invariants_hold_for_arbitrary_inputs(
            seed in any::<u64>(),
            inputs in proptest::collection::vec((any::<bool>(), any::<bool>()), 1..500),
        ) {
            let mut state = GameState::new(seed);
            let mut last_speed = state.game_speed;
            let mut last_interval = state.spawn_interval_ms;

            for (jump, duck) in inputs {
                tick(&mut state, &TickInput { jump, duck, restart: false });

                prop_assert!(state.game_speed >= last_speed);
                prop_assert!(state.game_speed <= state.tuning.max_speed);
                prop_assert!(state.spawn_interval_ms <= last_interval);
                prop_assert!(state.spawn_interval_ms >= state.tuning.spawn_interval_floor_ms);
                if state.player.posture != Posture::Falling {
                    prop_assert!(state.player.bottom() <= GROUND_LINE + 1e-3);
                }

                last_speed = state.game_speed;
                last_interval = state.spawn_interval_ms;
            }
        }
    }
}

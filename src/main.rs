//! Petal Run entry point
//!
//! Runs the simulation headless with a reactive autopilot. Rendering
//! front-ends own their frame pacing and drive `sim::tick` the same way;
//! this binary is the reference driver and a quick smoke run:
//!
//! ```sh
//! RUST_LOG=info petal-run [seed] [max-seconds]
//! ```

use petal_run::consts::TICK_RATE;
use petal_run::sim::{GamePhase, GameState, ObstacleKind, Posture, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB105_50);
    let max_seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);
    let max_ticks = max_seconds * TICK_RATE as u64;

    log::info!("Petal Run (headless) seed={seed}");
    let mut state = GameState::new(seed);

    while state.phase == GamePhase::Active && state.time_ticks < max_ticks {
        let input = autopilot(&state);
        tick(&mut state, &input);
    }

    log::info!(
        "session ended: score={} speed={:.1} ticks={}",
        state.score,
        state.game_speed,
        state.time_ticks
    );
}

/// Demo pilot: duck under approaching flyers, jump over everything else.
/// Reacts when the next obstacle closes within a speed-scaled window.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player = &state.player;

    // Nearest obstacle that has not fully passed the player yet
    let Some(next) = state
        .obstacles
        .iter()
        .find(|o| o.right() > player.pos.x - player.radius)
    else {
        return input;
    };

    let gap = next.x - player.pos.x;
    let window = state.game_speed * 14.0;

    match next.kind {
        ObstacleKind::FlyerLow | ObstacleKind::FlyerHigh => {
            // Stay low for the whole pass
            input.duck = gap < window;
        }
        ObstacleKind::Box | ObstacleKind::Tower | ObstacleKind::Hole => {
            input.jump = gap < window && player.posture == Posture::Running;
        }
    }

    input
}

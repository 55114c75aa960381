//! Petal Run - a side-scrolling runner game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacles, collisions)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, text/UI panels, window creation, and input polling live in
//! front-end collaborators that read the state this crate publishes each
//! tick and feed intents back in.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (matches the classic 60 FPS frame clock)
    pub const TICK_RATE: f32 = 60.0;
    /// Wall-clock budget of one tick, in milliseconds
    pub const TICK_MS: f32 = 1000.0 / TICK_RATE;

    /// Viewport dimensions (y grows downward, screen style)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Height of the ground strip along the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 50.0;
    /// Top edge of the ground; the player's bottom rests on this line
    pub const GROUND_LINE: f32 = VIEWPORT_HEIGHT - GROUND_HEIGHT;

    /// Lane column the player occupies
    pub const PLAYER_LANE_X: f32 = 80.0;
    /// Collision radius while running or jumping
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Collision radius while ducking
    pub const PLAYER_DUCK_RADIUS: f32 = 15.0;

    /// Rolling animation advance per tick while running (degrees)
    pub const ROTATION_STEP: f32 = 5.0;
    /// One full turn of the rolling animation (degrees)
    pub const FULL_TURN: f32 = 360.0;

    /// Horizontal inset applied to a hole's edges so grazing the lip does
    /// not count as being over it
    pub const HOLE_EDGE_MARGIN: f32 = 5.0;
    /// Divisor mapping entry distance from the hole center to the capped
    /// closing speed of the fall sequence
    pub const FALL_CLOSING_RAMP: f32 = 20.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(mut angle: f32) -> f32 {
    use crate::consts::FULL_TURN;
    while angle >= FULL_TURN {
        angle -= FULL_TURN;
    }
    while angle < 0.0 {
        angle += FULL_TURN;
    }
    angle
}

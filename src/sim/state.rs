//! Session state and core simulation types
//!
//! All state that must be persisted for snapshots/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;
use crate::wrap_degrees;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing; score accumulating
    Active,
    /// Run ended; only a restart intent is honored
    GameOver,
}

/// The player's discrete physical state. Exactly one variant holds at any
/// time; `Falling` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    Running,
    Jumping,
    Ducking,
    Falling,
}

/// The controllable runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position; x stays at the lane column until a fall sequence
    /// pulls it toward the hole center
    pub pos: Vec2,
    /// Effective collision radius (normal, duck, or fall-shrunk)
    pub radius: f32,
    /// Vertical velocity while airborne (positive is downward)
    pub vertical_velocity: f32,
    /// Upward velocity applied on jump; magnitude grows with difficulty
    pub jump_impulse: f32,
    /// Rolling animation angle in degrees (cosmetic only)
    pub rotation: f32,
    pub posture: Posture,
}

impl Player {
    pub fn new(jump_impulse: f32) -> Self {
        Self {
            pos: Vec2::new(PLAYER_LANE_X, GROUND_LINE - PLAYER_RADIUS),
            radius: PLAYER_RADIUS,
            vertical_velocity: 0.0,
            jump_impulse,
            rotation: 0.0,
            posture: Posture::Running,
        }
    }

    /// Lowest point of the player's circle
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Jump intent; only honored from `Running`
    pub fn jump(&mut self) {
        if self.posture == Posture::Running {
            self.posture = Posture::Jumping;
            self.vertical_velocity = self.jump_impulse;
        }
    }

    /// Duck-hold intent; shrinks the radius and keeps the bottom on the
    /// ground. Holding duck while already ducking is a no-op.
    pub fn duck(&mut self) {
        match self.posture {
            Posture::Running | Posture::Ducking => {
                self.posture = Posture::Ducking;
                self.radius = PLAYER_DUCK_RADIUS;
                self.anchor_to_ground();
            }
            Posture::Jumping | Posture::Falling => {}
        }
    }

    /// Duck-release intent; restores the normal radius and anchor
    pub fn release_duck(&mut self) {
        if self.posture == Posture::Ducking {
            self.posture = Posture::Running;
            self.radius = PLAYER_RADIUS;
            self.anchor_to_ground();
        }
    }

    /// One fixed-timestep physics update while the session is active.
    /// Jump arcs integrate gravity; the rolling animation advances only
    /// while running.
    pub fn step_physics(&mut self, gravity: f32) {
        match self.posture {
            Posture::Jumping => {
                self.vertical_velocity += gravity;
                self.pos.y += self.vertical_velocity;

                // Landed: re-anchor and resume running
                if self.bottom() >= GROUND_LINE {
                    self.anchor_to_ground();
                    self.vertical_velocity = 0.0;
                    self.posture = Posture::Running;
                }
            }
            Posture::Running => {
                self.rotation = wrap_degrees(self.rotation + ROTATION_STEP);
            }
            Posture::Ducking | Posture::Falling => {}
        }
    }

    fn anchor_to_ground(&mut self) {
        self.pos.y = GROUND_LINE - self.radius;
    }
}

/// Obstacle variants. Geometry is fixed per kind: the two Flyer kinds sit at
/// duck-trigger heights, the ground kinds and the hole demand a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Ground-solid block
    Box,
    /// Tall ground-solid block
    Tower,
    /// Airborne, low duck-trigger height
    FlyerLow,
    /// Airborne, high duck-trigger height
    FlyerHigh,
    /// Gap occupying the full ground height
    Hole,
}

impl ObstacleKind {
    pub const ALL: [Self; 5] = [
        Self::Box,
        Self::Tower,
        Self::FlyerLow,
        Self::FlyerHigh,
        Self::Hole,
    ];

    /// Width and height of this kind
    pub const fn size(self) -> (f32, f32) {
        match self {
            Self::Box => (35.0, 35.0),
            Self::Tower => (38.0, 75.0),
            Self::FlyerLow => (60.0, 30.0),
            Self::FlyerHigh => (70.0, 35.0),
            Self::Hole => (70.0, GROUND_HEIGHT),
        }
    }

    /// Top edge y at spawn. Ground kinds rest on the ground line, flyers
    /// hover above it, and holes open at ground level.
    pub const fn spawn_top(self) -> f32 {
        match self {
            Self::Box => GROUND_LINE - 35.0,
            Self::Tower => GROUND_LINE - 75.0,
            Self::FlyerLow => GROUND_LINE - 60.0,
            Self::FlyerHigh => GROUND_LINE - 70.0,
            Self::Hole => GROUND_LINE,
        }
    }

    pub const fn is_hole(self) -> bool {
        matches!(self, Self::Hole)
    }
}

/// A live obstacle in the lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge; decreases by the game speed each tick
    pub x: f32,
    /// Top edge (fixed per kind)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    /// Create an obstacle of the given kind at the right edge of the viewport
    pub fn spawn(kind: ObstacleKind) -> Self {
        let (width, height) = kind.size();
        debug_assert!(width > 0.0 && height > 0.0);
        Self {
            kind,
            x: VIEWPORT_WIDTH,
            y: kind.spawn_top(),
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Move leftward by the current game speed
    pub fn advance(&mut self, game_speed: f32) {
        self.x -= game_speed;
    }

    /// True once the right edge has passed the viewport's left edge
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }
}

/// Bounded sub-simulation run after the player drops into a hole.
/// Advanced by the main tick while the posture is `Falling`; the rest of
/// the session (score, speed, spawns, obstacle motion) freezes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallSequence {
    /// Ticks elapsed since entry
    pub ticks: u32,
    /// Downward velocity, capped at the terminal velocity
    pub velocity: f32,
    /// Horizontal center of the hole the player fell into
    pub target_x: f32,
    /// Per-tick horizontal closing speed, fixed at entry
    pub closing_speed: f32,
}

impl FallSequence {
    pub fn begin(player_x: f32, hole_center_x: f32, tuning: &Tuning) -> Self {
        Self {
            ticks: 0,
            velocity: 0.0,
            target_x: hole_center_x,
            closing_speed: tuning
                .fall_closing_speed_cap
                .min((hole_center_x - player_x).abs() / FALL_CLOSING_RAMP),
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; the only source of randomness in the core
    pub rng: Pcg32,
    /// Balance knobs this session was built with
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Increments by one per simulated active frame
    pub score: u64,
    /// Horizontal velocity applied to obstacles each tick
    pub game_speed: f32,
    /// Current budget between obstacle spawns
    pub spawn_interval_ms: f32,
    /// Elapsed budget since the last spawn
    pub spawn_clock_ms: f32,
    /// Live obstacles in creation order
    pub obstacles: Vec<Obstacle>,
    pub player: Player,
    /// Present exactly while the player's posture is `Falling`
    pub fall: Option<FallSequence>,
    /// Simulated active frames
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session with default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session with explicit balance knobs
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Active,
            score: 0,
            game_speed: tuning.base_speed,
            spawn_interval_ms: tuning.spawn_interval_ms,
            spawn_clock_ms: 0.0,
            obstacles: Vec::new(),
            player: Player::new(tuning.jump_impulse),
            fall: None,
            time_ticks: 0,
            tuning,
        }
    }

    /// Full reset to initial values, discarding all obstacles. The RNG
    /// keeps its stream so successive runs see different obstacle draws.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Active;
        self.score = 0;
        self.game_speed = self.tuning.base_speed;
        self.spawn_interval_ms = self.tuning.spawn_interval_ms;
        self.spawn_clock_ms = 0.0;
        self.obstacles.clear();
        self.player = Player::new(self.tuning.jump_impulse);
        self.fall = None;
        self.time_ticks = 0;
    }
}

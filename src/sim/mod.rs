//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Obstacles iterated in creation order
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, resolve};
pub use state::{FallSequence, GamePhase, GameState, Obstacle, ObstacleKind, Player, Posture};
pub use tick::{TickInput, tick};

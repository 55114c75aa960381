//! Data-driven game balance
//!
//! Every behavioral knob of the simulation lives here; the defaults
//! reproduce the classic feel (60 Hz, jump impulse -18, speed 5 to 15).
//! Fixed geometry (viewport, lane, radii, obstacle dimensions) is not
//! tunable and stays in `consts`.

use serde::{Deserialize, Serialize};

/// Balance knobs for one session. Values pass through [`Tuning::sanitized`]
/// on session construction, so out-of-range configs clamp instead of
/// breaking invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick while jumping
    pub gravity: f32,
    /// Upward velocity applied on jump (negative is up)
    pub jump_impulse: f32,
    /// Extra jump-impulse magnitude gained per difficulty checkpoint
    pub jump_impulse_step: f32,

    /// Scroll speed at session start
    pub base_speed: f32,
    /// Scroll speed cap
    pub max_speed: f32,
    /// Speed gained per difficulty checkpoint
    pub speed_step: f32,
    /// Score multiple that triggers a difficulty checkpoint
    pub speed_checkpoint: u64,

    /// Budget between obstacle spawns at session start (milliseconds)
    pub spawn_interval_ms: f32,
    /// Tightest allowed spawn budget; must stay strictly positive
    pub spawn_interval_floor_ms: f32,
    /// Budget removed after each spawn
    pub spawn_interval_step_ms: f32,

    /// Downward acceleration per tick during the fall sequence
    pub fall_gravity: f32,
    /// Terminal velocity of the fall sequence
    pub fall_terminal_velocity: f32,
    /// Length of the fall sequence in ticks
    pub fall_duration_ticks: u32,
    /// Spin advance per falling tick (degrees)
    pub fall_rotation_step: f32,
    /// Radius fraction reached on the fall's final tick
    pub fall_shrink_min: f32,
    /// Cap on the horizontal closing speed toward the hole center
    pub fall_closing_speed_cap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            jump_impulse: -18.0,
            jump_impulse_step: 0.05,

            base_speed: 5.0,
            max_speed: 15.0,
            speed_step: 0.1,
            speed_checkpoint: 200,

            spawn_interval_ms: 1500.0,
            spawn_interval_floor_ms: 1000.0,
            spawn_interval_step_ms: 10.0,

            fall_gravity: 0.5,
            fall_terminal_velocity: 10.0,
            fall_duration_ticks: 60,
            fall_rotation_step: 8.0,
            fall_shrink_min: 0.3,
            fall_closing_speed_cap: 2.0,
        }
    }
}

impl Tuning {
    /// Parse a JSON override; missing fields fall back to defaults and the
    /// result is sanitized.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Serialize for config files or debugging dumps
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamp every knob into its legal range. A spawn floor at or below
    /// zero would mean runaway spawn rates, so it falls back to the
    /// default; intervals, speeds, and the shrink floor clamp likewise.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.gravity <= 0.0 {
            self.gravity = defaults.gravity;
        }
        if self.jump_impulse >= 0.0 {
            self.jump_impulse = defaults.jump_impulse;
        }
        self.jump_impulse_step = self.jump_impulse_step.max(0.0);

        if self.base_speed <= 0.0 {
            self.base_speed = defaults.base_speed;
        }
        if self.max_speed < self.base_speed {
            self.max_speed = self.base_speed;
        }
        self.speed_step = self.speed_step.max(0.0);
        self.speed_checkpoint = self.speed_checkpoint.max(1);

        if self.spawn_interval_floor_ms <= 0.0 {
            self.spawn_interval_floor_ms = defaults.spawn_interval_floor_ms;
        }
        if self.spawn_interval_ms < self.spawn_interval_floor_ms {
            self.spawn_interval_ms = self.spawn_interval_floor_ms;
        }
        self.spawn_interval_step_ms = self.spawn_interval_step_ms.max(0.0);

        if self.fall_gravity <= 0.0 {
            self.fall_gravity = defaults.fall_gravity;
        }
        if self.fall_terminal_velocity <= 0.0 {
            self.fall_terminal_velocity = defaults.fall_terminal_velocity;
        }
        if self.fall_duration_ticks == 0 {
            self.fall_duration_ticks = defaults.fall_duration_ticks;
        }
        if !(self.fall_shrink_min > 0.0 && self.fall_shrink_min <= 1.0) {
            self.fall_shrink_min = defaults.fall_shrink_min;
        }
        if self.fall_closing_speed_cap < 0.0 {
            self.fall_closing_speed_cap = defaults.fall_closing_speed_cap;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_already_sane() {
        let tuning = Tuning::default();
        assert_eq!(tuning, tuning.sanitized());
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning::default();
        let parsed = Tuning::from_json(&tuning.to_json()).unwrap();
        assert_eq!(tuning, parsed);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let parsed = Tuning::from_json(r#"{ "base_speed": 8.0 }"#).unwrap();
        assert_eq!(parsed.base_speed, 8.0);
        assert_eq!(parsed.max_speed, Tuning::default().max_speed);
        assert_eq!(parsed.speed_checkpoint, Tuning::default().speed_checkpoint);
    }

    #[test]
    fn test_sanitize_clamps_spawn_floor() {
        let bad = Tuning {
            spawn_interval_floor_ms: 0.0,
            spawn_interval_ms: -5.0,
            ..Tuning::default()
        };
        let fixed = bad.sanitized();
        assert!(fixed.spawn_interval_floor_ms > 0.0);
        assert!(fixed.spawn_interval_ms >= fixed.spawn_interval_floor_ms);
    }

    #[test]
    fn test_sanitize_keeps_speed_cap_above_base() {
        let bad = Tuning {
            base_speed: 9.0,
            max_speed: 2.0,
            ..Tuning::default()
        };
        let fixed = bad.sanitized();
        assert_eq!(fixed.max_speed, fixed.base_speed);
    }

    #[test]
    fn test_sanitize_rejects_upward_gravity_and_zero_duration() {
        let bad = Tuning {
            gravity: -1.0,
            jump_impulse: 3.0,
            fall_duration_ticks: 0,
            fall_shrink_min: 1.5,
            ..Tuning::default()
        };
        let fixed = bad.sanitized();
        let defaults = Tuning::default();
        assert_eq!(fixed.gravity, defaults.gravity);
        assert_eq!(fixed.jump_impulse, defaults.jump_impulse);
        assert_eq!(fixed.fall_duration_ticks, defaults.fall_duration_ticks);
        assert_eq!(fixed.fall_shrink_min, defaults.fall_shrink_min);
    }
}

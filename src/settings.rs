//! Simulation settings
//!
//! Tuning knobs that select between the engine's behavioral variants.
//! Loaded from JSON by the host; every field falls back to its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

/// Simulation settings/variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ship ===
    /// Clamp ship speed to this magnitude (units/tick). `None` disables the cap.
    pub speed_cap: Option<f32>,
    /// Velocity added along the heading per tick of thrust
    pub thrust: f32,
    /// Radians turned per tick of rotate input
    pub turn_rate: f32,

    // === Bullets ===
    /// Bullets wrap around the arena (false = destroyed on leaving it)
    pub bullet_wrap: bool,
    /// Fire without arming the cooldown
    pub rapid_fire: bool,
    /// Cooldown window after a shot (ms, host timer)
    pub fire_cooldown_ms: u32,

    // === Host pacing ===
    /// Tick period the host should drive `tick` at (ms)
    pub tick_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed_cap: None,
            thrust: SHIP_THRUST,
            turn_rate: SHIP_TURN_RATE,

            bullet_wrap: true,
            rapid_fire: false,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,

            tick_ms: TICK_MS,
        }
    }
}

impl Settings {
    /// Default settings with the 10 units/tick speed cap enabled
    pub fn capped() -> Self {
        Self {
            speed_cap: Some(DEFAULT_SPEED_CAP),
            ..Self::default()
        }
    }

    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to JSON
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would corrupt motion math
    pub fn validate(&self) -> Result<(), SimError> {
        if let Some(cap) = self.speed_cap {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(SimError::InvalidSetting {
                    field: "speed_cap",
                    reason: "must be positive and finite",
                });
            }
        }
        if !self.thrust.is_finite() || self.thrust < 0.0 {
            return Err(SimError::InvalidSetting {
                field: "thrust",
                reason: "must be non-negative and finite",
            });
        }
        if !self.turn_rate.is_finite() || self.turn_rate < 0.0 {
            return Err(SimError::InvalidSetting {
                field: "turn_rate",
                reason: "must be non-negative and finite",
            });
        }
        if self.tick_ms == 0 {
            return Err(SimError::InvalidSetting {
                field: "tick_ms",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

//! Asteroid Field - a toroidal arena of polygonal bodies
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, wrap, collisions, round state)
//! - `renderer`: Drawable shape descriptors for the host to rasterize
//! - `platform`: Host-side tick pacing and cooldown timers
//! - `settings`: Data-driven tuning knobs

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Nominal tick period of the host timer (ms)
    pub const TICK_MS: u32 = 30;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Accepted asteroid count per round
    pub const MIN_ASTEROIDS: u32 = 1;
    pub const MAX_ASTEROIDS: u32 = 1000;
    /// Starting a round with exactly this many asteroids unlocks rapid fire
    pub const RAPID_FIRE_ASTEROID_COUNT: u32 = 500;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 15.0;
    pub const SHIP_SHAPE: [f32; 3] = [-2.5, 0.0, 2.5];
    /// Index into `SHIP_SHAPE` of the nose vertex
    pub const SHIP_NOSE_VERTEX: usize = 1;
    /// Nose up
    pub const SHIP_START_ROTATION: f32 = -PI / 2.0;
    /// Velocity added per tick of forward/backward input
    pub const SHIP_THRUST: f32 = 0.4;
    /// Radians per tick of rotate input
    pub const SHIP_TURN_RATE: f32 = PI / 16.0;
    /// Speed cap used by the clamping variant (units/tick)
    pub const DEFAULT_SPEED_CAP: f32 = 10.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 5.0;
    pub const BULLET_TTL: u32 = 80;
    pub const BULLET_RADIUS_MIN: f32 = 3.0;
    pub const BULLET_RADIUS_MAX: f32 = 5.0;
    pub const BULLET_SHAPE: [f32; 2] = [0.0, PI];
    /// Bullets wrap with a fixed margin regardless of their own radius
    pub const BULLET_WRAP_MARGIN: f32 = 15.0;
    /// Delay before the ship may fire again (ms, host timer)
    pub const FIRE_COOLDOWN_MS: u32 = 250;

    /// Asteroid generation ranges
    pub const ASTEROID_RADIUS_MIN: f32 = 5.0;
    pub const ASTEROID_RADIUS_MAX: f32 = 45.0;
    pub const ASTEROID_MAX_SPEED: f32 = 5.0;
    pub const ASTEROID_MAX_SPIN: f32 = 0.125;
    pub const ASTEROID_VERTICES_MIN: usize = 10;
    pub const ASTEROID_VERTICES_MAX: usize = 20;
}

/// Normalize angle to (-π, π]
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    while angle > PI {
        angle -= TAU;
    }
    while angle <= -PI {
        angle += TAU;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

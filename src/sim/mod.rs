//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick`
//! - Seeded RNG only
//! - Stable iteration order (spawn order, removal by id)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod factory;
pub mod geometry;
pub mod state;
pub mod tick;

#[cfg(test)]
mod proptest_sim;

pub use body::{Body, BodyId, BodyKind, Bounds, KindRules, wrap_axis};
pub use collision::{broad_phase, collisions_against, narrow_phase};
pub use geometry::{intersect_lines, point_in_polygon, segments_intersect};
pub use state::{CooldownToken, EndReason, GameEvent, RoundPhase, Simulation, start_round};
pub use tick::{TickInput, tick};

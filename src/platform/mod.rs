//! Host-side helpers
//!
//! Handles the parts of the loop that live outside the deterministic core:
//! - Fixed-rate tick pacing from wall-clock frame deltas
//! - One-shot fire cooldown timers

pub mod runner;
pub mod timer;

pub use runner::Runner;
pub use timer::CooldownTimers;

//! One-shot cooldown timers
//!
//! Runs on wall-clock milliseconds, independent of the tick cadence. A timer
//! that outlives its round is harmless: the simulation ignores tokens from
//! other rounds or ships.

use crate::sim::CooldownToken;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingClear {
    due_ms: f64,
    token: CooldownToken,
}

/// Pending fire-cooldown clears, ordered by due time
#[derive(Debug, Clone, Default)]
pub struct CooldownTimers {
    pending: Vec<PendingClear>,
}

impl CooldownTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arrange for `token` to come due at `due_ms`
    pub fn schedule(&mut self, due_ms: f64, token: CooldownToken) {
        let at = self.pending.partition_point(|p| p.due_ms <= due_ms);
        self.pending.insert(at, PendingClear { due_ms, token });
    }

    /// Remove and return every token due at or before `now_ms`, oldest first
    pub fn take_due(&mut self, now_ms: f64) -> Vec<CooldownToken> {
        let due = self.pending.partition_point(|p| p.due_ms <= now_ms);
        self.pending.drain(..due).map(|p| p.token).collect()
    }

    /// Drop every pending timer
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("Cancelled {} pending cooldown timers", self.pending.len());
        }
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

//! Fixed-step runner
//!
//! Turns variable host frame deltas into whole simulation ticks and routes
//! the fire-cooldown timer. Hosts call `frame` once per animation frame (or
//! from their own interval) with the elapsed wall-clock time.

use crate::consts::MAX_SUBSTEPS;
use crate::error::SimError;
use crate::renderer::{FrameView, frame_view};
use crate::settings::Settings;
use crate::sim::{GameEvent, Simulation, TickInput, tick};

use super::timer::CooldownTimers;

/// Owns a simulation plus the host-side timers that drive it
#[derive(Debug, Clone)]
pub struct Runner {
    sim: Simulation,
    timers: CooldownTimers,
    accumulator_ms: f32,
    clock_ms: f64,
    /// Events forwarded to the host (cooldown bookkeeping already handled)
    outbox: Vec<GameEvent>,
}

impl Runner {
    /// Create a simulation and start its first round
    pub fn new(
        settings: Settings,
        seed: u64,
        asteroid_count: u32,
        width: f32,
        height: f32,
    ) -> Result<Self, SimError> {
        let mut runner = Self {
            sim: Simulation::new(settings, seed),
            timers: CooldownTimers::new(),
            accumulator_ms: 0.0,
            clock_ms: 0.0,
            outbox: Vec::new(),
        };
        runner.restart(asteroid_count, width, height)?;
        Ok(runner)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    /// Wall-clock time seen so far (ms)
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Cooldown clears not yet delivered
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Start a new round. Pending cooldown timers from the old round are dropped.
    ///
    /// On error the current round is left untouched.
    pub fn restart(&mut self, asteroid_count: u32, width: f32, height: f32) -> Result<(), SimError> {
        self.sim.start_round(asteroid_count, width, height)?;
        self.timers.cancel_all();
        self.accumulator_ms = 0.0;
        self.route_events();
        Ok(())
    }

    /// Advance wall-clock time by `elapsed_ms` and run the ticks that fit.
    ///
    /// Returns the number of ticks run, at most `MAX_SUBSTEPS`. Cooldown
    /// timers see the full elapsed time; only the tick backlog is clamped.
    pub fn frame(&mut self, elapsed_ms: f32, input: &TickInput) -> u32 {
        let tick_ms = self.sim.settings.tick_ms as f32;
        // NaN would poison the clock and accumulator for good
        let elapsed_ms = if elapsed_ms.is_nan() {
            0.0
        } else {
            elapsed_ms.max(0.0)
        };

        self.clock_ms += elapsed_ms as f64;
        self.fire_due_timers();

        self.accumulator_ms += elapsed_ms.min(tick_ms * MAX_SUBSTEPS as f32);
        let mut substeps = 0;
        while self.accumulator_ms >= tick_ms && substeps < MAX_SUBSTEPS {
            tick(&mut self.sim, input);
            self.accumulator_ms -= tick_ms;
            substeps += 1;
            self.route_events();
        }
        substeps
    }

    /// Snapshot for drawing
    pub fn view(&self) -> FrameView {
        frame_view(&self.sim)
    }

    /// Take the events gathered since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    fn fire_due_timers(&mut self) {
        for token in self.timers.take_due(self.clock_ms) {
            self.sim.clear_fire_cooldown(token);
        }
    }

    fn route_events(&mut self) {
        for event in self.sim.drain_events() {
            if let GameEvent::FireCooldownStarted(token) = event {
                let due = self.clock_ms + self.sim.settings.fire_cooldown_ms as f64;
                self.timers.schedule(due, token);
            }
            self.outbox.push(event);
        }
    }
}

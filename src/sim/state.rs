//! Round state and the owned body collections
//!
//! `Simulation` is the single owner and mutator of every live body. It is
//! created once, then restarted per round; nothing else keeps references
//! to its bodies across ticks.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyId, BodyKind, Bounds};
use super::factory;
use crate::consts::*;
use crate::error::SimError;
use crate::settings::Settings;

/// How a round finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Every asteroid destroyed
    Won,
    /// Ship struck an asteroid
    Lost,
}

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round started yet
    Idle,
    /// Ticks advance the world
    Running,
    /// Terminal until the next `start_round`
    Ended(EndReason),
}

/// Proof of which ship armed a fire cooldown
///
/// The host hands this back when its cooldown timer expires. A token from an
/// earlier round or another ship never clears the current ship's flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CooldownToken {
    pub round: u64,
    pub ship: BodyId,
}

/// Notable state changes for the host (UI, audio, timers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u64, asteroids: u32 },
    BulletFired { bullet: BodyId },
    /// Host should call `clear_fire_cooldown` with this token after the cooldown window
    FireCooldownStarted(CooldownToken),
    AsteroidDestroyed { asteroid: BodyId, bullet: BodyId },
    ScoreChanged(u64),
    ShipDestroyed { asteroid: BodyId },
    RoundEnded(EndReason),
}

/// Complete world state for one arena
#[derive(Debug, Clone)]
pub struct Simulation {
    pub settings: Settings,
    pub bounds: Bounds,
    pub phase: RoundPhase,
    /// Asteroids destroyed by bullets this round
    pub score: u64,
    /// Round counter, bumped by every `start_round`
    pub round: u64,
    /// Ticks run this round
    pub time_ticks: u64,
    /// Rapid fire for the current round (setting or easter-egg count)
    pub rapid_fire: bool,
    /// Player ship (`None` once destroyed)
    pub ship: Option<Body>,
    /// Live asteroids (spawn order)
    pub asteroids: Vec<Body>,
    /// Live bullets (fire order)
    pub bullets: Vec<Body>,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    seed: u64,
    next_id: u32,
}

impl Simulation {
    /// Idle simulation; call `start_round` to populate it
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            bounds: Bounds {
                min: glam::Vec2::ZERO,
                max: glam::Vec2::ZERO,
            },
            settings,
            phase: RoundPhase::Idle,
            score: 0,
            round: 0,
            time_ticks: 0,
            rapid_fire: false,
            ship: None,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            next_id: 1,
        }
    }

    /// Seed the RNG was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Allocate a new body ID
    pub fn next_entity_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Validate the request, then replace the world with a fresh round.
    ///
    /// On error nothing changes: a running round keeps running.
    pub fn start_round(&mut self, asteroid_count: u32, width: f32, height: f32) -> Result<(), SimError> {
        if !(MIN_ASTEROIDS..=MAX_ASTEROIDS).contains(&asteroid_count) {
            log::warn!("Rejected round start with {} asteroids", asteroid_count);
            return Err(SimError::AsteroidCountOutOfRange {
                count: asteroid_count,
                min: MIN_ASTEROIDS,
                max: MAX_ASTEROIDS,
            });
        }
        let bounds = Bounds::from_size(width, height).inspect_err(|e| {
            log::warn!("Rejected round start: {}", e);
        })?;
        self.settings.validate()?;

        self.bounds = bounds;
        self.round += 1;
        self.score = 0;
        self.time_ticks = 0;
        self.rapid_fire =
            self.settings.rapid_fire || asteroid_count == RAPID_FIRE_ASTEROID_COUNT;
        self.bullets.clear();
        self.asteroids.clear();
        self.events.clear();

        for _ in 0..asteroid_count {
            let id = self.next_entity_id();
            let asteroid = factory::random_asteroid(&mut self.rng, id, &self.bounds);
            self.asteroids.push(asteroid);
        }
        let ship_id = self.next_entity_id();
        self.ship = Some(factory::ship(ship_id, &self.bounds));
        self.phase = RoundPhase::Running;

        log::info!(
            "Round {} started: {} asteroids in {}x{} arena{}",
            self.round,
            asteroid_count,
            width,
            height,
            if self.rapid_fire { " (rapid fire)" } else { "" }
        );
        self.events.push(GameEvent::RoundStarted {
            round: self.round,
            asteroids: asteroid_count,
        });
        Ok(())
    }

    /// Clear the ship's fire cooldown if `token` belongs to the current ship.
    ///
    /// Returns whether the token matched. Safe to call more than once.
    pub fn clear_fire_cooldown(&mut self, token: CooldownToken) -> bool {
        match self.ship.as_mut() {
            Some(ship) if token.round == self.round && ship.id == token.ship => {
                ship.fire_cooldown_active = false;
                true
            }
            _ => {
                log::trace!("Ignoring stale cooldown token {:?}", token);
                false
            }
        }
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }

    /// Every live body in draw order: ship, asteroids, bullets
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.ship
            .iter()
            .chain(self.asteroids.iter())
            .chain(self.bullets.iter())
    }

    /// Panic if the world breaks a structural invariant.
    ///
    /// These can only fail through a bug in the tick logic.
    pub fn assert_invariants(&self) {
        let mut seen = HashSet::new();
        for body in self.bodies() {
            assert!(seen.insert(body.id), "duplicate body identity {:?}", body.id);
            assert!(
                body.radius > 0.0,
                "{:?} {:?} has non-positive radius",
                body.kind,
                body.id
            );
            assert!(
                body.rotation > -std::f32::consts::PI && body.rotation <= std::f32::consts::PI,
                "{:?} {:?} rotation {} out of range",
                body.kind,
                body.id,
                body.rotation
            );
        }
        if let Some(ship) = &self.ship {
            assert_eq!(ship.kind, BodyKind::Ship, "ship slot holds a {:?}", ship.kind);
        }
        for asteroid in &self.asteroids {
            assert_eq!(asteroid.kind, BodyKind::Asteroid);
        }
        for bullet in &self.bullets {
            assert_eq!(bullet.kind, BodyKind::Bullet);
            assert!(
                matches!(bullet.time_to_live, Some(ttl) if ttl > 0),
                "expired bullet {:?} still live",
                bullet.id
            );
        }
    }
}

/// Build a simulation and start its first round
pub fn start_round(
    asteroid_count: u32,
    width: f32,
    height: f32,
    settings: Settings,
    seed: u64,
) -> Result<Simulation, SimError> {
    let mut sim = Simulation::new(settings, seed);
    sim.start_round(asteroid_count, width, height)?;
    Ok(sim)
}

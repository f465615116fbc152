//! Fixed timestep simulation tick
//!
//! One call advances the round by exactly one step:
//! input → motion → bullet hits → win check → ship hits.

use std::collections::BTreeSet;

use super::body::BodyId;
use super::collision::collisions_against;
use super::factory;
use super::state::{CooldownToken, EndReason, GameEvent, RoundPhase, Simulation};

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub forward: bool,
    pub backward: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
}

/// Advance the simulation by one tick. Does nothing unless a round is running.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    if sim.phase != RoundPhase::Running {
        return;
    }

    sim.time_ticks += 1;

    apply_input(sim, input);
    advance_bodies(sim);
    resolve_bullet_hits(sim);

    // Win is checked before loss so a final kill wins even if the ship dies the same tick
    if sim.asteroids.is_empty() {
        end_round(sim, EndReason::Won);
    } else {
        resolve_ship_hits(sim);
    }

    if cfg!(debug_assertions) {
        sim.assert_invariants();
    }
}

/// Rotate, thrust and fire
fn apply_input(sim: &mut Simulation, input: &TickInput) {
    let Some(ship) = sim.ship.as_mut() else {
        return;
    };

    if input.forward {
        ship.thrust(sim.settings.thrust);
    }
    if input.backward {
        ship.thrust(-sim.settings.thrust);
    }
    if let Some(cap) = sim.settings.speed_cap {
        ship.clamp_speed(cap);
    }
    if input.rotate_left {
        ship.rotate(-sim.settings.turn_rate);
    }
    if input.rotate_right {
        ship.rotate(sim.settings.turn_rate);
    }

    if input.fire {
        fire(sim);
    }
}

/// Spawn a bullet from the ship's nose unless the cooldown is armed
fn fire(sim: &mut Simulation) {
    let ready = sim.ship.as_ref().is_some_and(|ship| !ship.fire_cooldown_active);
    if !ready {
        return;
    }

    let id = sim.next_entity_id();
    let Some(ship) = sim.ship.as_mut() else {
        return;
    };
    let bullet = factory::bullet(&mut sim.rng, id, ship);
    log::debug!("Bullet {:?} fired at {:?}", bullet.id, bullet.pos);
    sim.events.push(GameEvent::BulletFired { bullet: bullet.id });
    sim.bullets.push(bullet);

    if !sim.rapid_fire {
        ship.fire_cooldown_active = true;
        sim.events.push(GameEvent::FireCooldownStarted(CooldownToken {
            round: sim.round,
            ship: ship.id,
        }));
    }
}

/// Move, spin and wrap every body; expire bullets
fn advance_bodies(sim: &mut Simulation) {
    let bounds = sim.bounds;

    if let Some(ship) = sim.ship.as_mut() {
        let margin = ship.wrap_margin();
        ship.advance(&bounds, margin);
        ship.spin();
    }

    for asteroid in &mut sim.asteroids {
        let margin = asteroid.wrap_margin();
        asteroid.advance(&bounds, margin);
        asteroid.spin();
    }

    let bullet_wrap = sim.settings.bullet_wrap;
    sim.bullets.retain_mut(|bullet| {
        if bullet_wrap {
            let margin = bullet.wrap_margin();
            bullet.advance(&bounds, margin);
        } else {
            bullet.translate();
            if !bounds.contains(bullet.pos) {
                return false;
            }
        }
        bullet.tick_lifetime()
    });
}

/// Destroy every asteroid struck by a bullet, along with the bullets that hit it.
///
/// Hits are collected first and removed in one compaction pass. A bullet is
/// spent on the first asteroid it hits.
fn resolve_bullet_hits(sim: &mut Simulation) {
    if sim.bullets.is_empty() {
        return;
    }

    let mut spent_bullets: BTreeSet<BodyId> = BTreeSet::new();
    let mut destroyed: BTreeSet<BodyId> = BTreeSet::new();

    for asteroid in &sim.asteroids {
        let live = sim.bullets.iter().filter(|b| !spent_bullets.contains(&b.id));
        let hits = collisions_against(asteroid, live);
        let Some(&first_bullet) = hits.first() else {
            continue;
        };

        destroyed.insert(asteroid.id);
        spent_bullets.extend(hits);
        sim.score += 1;
        log::debug!("Asteroid {:?} destroyed by bullet {:?}", asteroid.id, first_bullet);
        sim.events.push(GameEvent::AsteroidDestroyed {
            asteroid: asteroid.id,
            bullet: first_bullet,
        });
    }

    if destroyed.is_empty() {
        return;
    }

    sim.asteroids.retain(|a| !destroyed.contains(&a.id));
    sim.bullets.retain(|b| !spent_bullets.contains(&b.id));
    sim.events.push(GameEvent::ScoreChanged(sim.score));
}

/// End the round if the ship touches any asteroid
fn resolve_ship_hits(sim: &mut Simulation) {
    let Some(ship) = sim.ship.as_ref() else {
        return;
    };

    let hits = collisions_against(ship, &sim.asteroids);
    let Some(&first) = hits.first() else {
        return;
    };

    log::debug!("Ship {:?} destroyed by asteroid {:?}", ship.id, first);
    sim.asteroids.retain(|a| !hits.contains(&a.id));
    sim.ship = None;
    sim.events.push(GameEvent::ShipDestroyed { asteroid: first });
    end_round(sim, EndReason::Lost);
}

fn end_round(sim: &mut Simulation, reason: EndReason) {
    sim.phase = RoundPhase::Ended(reason);
    log::info!(
        "Round {} ended: {:?} after {} ticks, score {}",
        sim.round,
        reason,
        sim.time_ticks,
        sim.score
    );
    sim.events.push(GameEvent::RoundEnded(reason));
}

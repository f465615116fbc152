//! Property-based tests for motion and collision using proptest.
//!
//! These check the invariants that must hold for any body configuration,
//! not just the hand-picked cases in the unit tests.

use glam::Vec2;
use proptest::prelude::*;
use std::f32::consts::PI;

use super::body::{Body, BodyId, BodyKind, wrap_axis};
use super::collision::{broad_phase, narrow_phase};
use super::geometry::segments_intersect;
use super::state::{RoundPhase, start_round};
use super::tick::{TickInput, tick};
use crate::consts::DEFAULT_SPEED_CAP;
use crate::settings::Settings;

const MIN: f32 = 0.0;
const MAX: f32 = 800.0;

/// Sorted vertex angles for a random polygon
fn polygon_shape() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-PI..PI, 3..12).prop_map(|mut angles| {
        angles.sort_by(f32::total_cmp);
        angles
    })
}

fn random_body(id: u32) -> impl Strategy<Value = Body> {
    (
        (-50.0f32..850.0, -50.0f32..650.0),
        1.0f32..50.0,
        -PI..PI,
        polygon_shape(),
    )
        .prop_map(move |((x, y), radius, rotation, shape)| {
            Body::new(
                BodyId(id),
                BodyKind::Asteroid,
                Vec2::new(x, y),
                Vec2::ZERO,
                radius,
                rotation,
                shape,
            )
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A coordinate past the margin band comes back inside it after one wrap.
    #[test]
    fn prop_wrap_brings_outside_positions_inside(
        margin in 0.0f32..50.0,
        overshoot in 0.01f32..700.0,
        above in any::<bool>(),
    ) {
        let value = if above { MAX + margin + overshoot } else { MIN - margin - overshoot };
        let wrapped = wrap_axis(value, MIN, MAX, margin);
        prop_assert!(
            wrapped >= MIN - margin - 1e-3 && wrapped <= MAX + margin + 1e-3,
            "value {} wrapped to {} (margin {})", value, wrapped, margin
        );
    }

    /// A coordinate already inside the margin band is left alone.
    #[test]
    fn prop_wrap_is_noop_inside_band(
        margin in 0.0f32..50.0,
        t in 0.0f32..=1.0,
    ) {
        let value = (MIN - margin) + t * (MAX - MIN + 2.0 * margin);
        let value = value.clamp(MIN - margin, MAX + margin);
        prop_assert_eq!(wrap_axis(value, MIN, MAX, margin), value);
    }

    /// Rotation never leaves (-π, π] however long a body spins.
    #[test]
    fn prop_spin_keeps_rotation_normalized(
        start in -PI..PI,
        spin in -1.0f32..1.0,
        steps in 1usize..500,
    ) {
        let mut body = Body::new(
            BodyId(1),
            BodyKind::Asteroid,
            Vec2::ZERO,
            Vec2::ZERO,
            10.0,
            start,
            vec![-2.0, 0.0, 2.0],
        );
        body.rotational_vel = spin;
        for _ in 0..steps {
            body.spin();
            prop_assert!(body.rotation > -PI && body.rotation <= PI, "rotation {}", body.rotation);
        }
    }

    /// The broad phase never rejects a pair the narrow phase accepts.
    #[test]
    fn prop_broad_phase_is_necessary(a in random_body(1), b in random_body(2)) {
        if narrow_phase(&a, &b) {
            prop_assert!(broad_phase(&a, &b));
        }
    }

    /// Two horizontal segments at different heights never intersect.
    #[test]
    fn prop_parallel_segments_never_collide(
        x1 in -100.0f32..100.0,
        x2 in -100.0f32..100.0,
        y in -100.0f32..100.0,
        gap in 0.1f32..50.0,
        len in 0.1f32..50.0,
    ) {
        let a1 = Vec2::new(x1, y);
        let a2 = Vec2::new(x1 + len, y);
        let b1 = Vec2::new(x2, y + gap);
        let b2 = Vec2::new(x2 + len, y + gap);
        prop_assert!(!segments_intersect(a1, a2, b1, b2));
    }

    /// With the cap enabled, thrust never pushes the ship past it.
    #[test]
    fn prop_speed_cap_holds(
        seed in any::<u64>(),
        steps in prop::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..150),
    ) {
        let mut sim = start_round(1, 4000.0, 4000.0, Settings::capped(), seed).unwrap();
        // Park the lone asteroid in a corner so the ship survives
        sim.asteroids[0].pos = Vec2::new(10.0, 10.0);
        sim.asteroids[0].vel = Vec2::ZERO;
        sim.asteroids[0].radius = 5.0;

        for (forward, left, right) in steps {
            let input = TickInput {
                forward,
                rotate_left: left,
                rotate_right: right,
                ..Default::default()
            };
            tick(&mut sim, &input);
            if sim.phase != RoundPhase::Running {
                break;
            }
            let speed = sim.ship.as_ref().unwrap().vel.length();
            prop_assert!(speed <= DEFAULT_SPEED_CAP + 1e-4, "speed {}", speed);
        }
    }
}


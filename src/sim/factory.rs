//! Procedural body generation
//!
//! All randomness comes from the caller's seeded RNG so a round is
//! reproducible from its seed.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

use super::body::{Body, BodyId, BodyKind, Bounds};
use crate::consts::*;
use crate::{normalize_angle, polar_to_cartesian};

/// Uniform angle in (-π, π]
fn random_angle<R: Rng>(rng: &mut R) -> f32 {
    normalize_angle(rng.random_range(-PI..PI))
}

/// Random point on the arena perimeter
///
/// Vertical edges are picked with probability height / (width + height), so
/// spawn density is the same per unit of perimeter on every side.
pub fn random_edge_pos<R: Rng>(rng: &mut R, bounds: &Bounds) -> Vec2 {
    let size = bounds.size();
    let on_vertical_edge = rng.random_range(0.0..size.x + size.y) < size.y;
    let far_side = rng.random_bool(0.5);

    if on_vertical_edge {
        let x = if far_side { bounds.max.x } else { bounds.min.x };
        Vec2::new(x, rng.random_range(bounds.min.y..=bounds.max.y))
    } else {
        let y = if far_side { bounds.max.y } else { bounds.min.y };
        Vec2::new(rng.random_range(bounds.min.x..=bounds.max.x), y)
    }
}

/// Random irregular polygon drifting in from the arena edge
pub fn random_asteroid<R: Rng>(rng: &mut R, id: BodyId, bounds: &Bounds) -> Body {
    let pos = random_edge_pos(rng, bounds);

    let heading = random_angle(rng);
    let speed = ASTEROID_MAX_SPEED * rng.random_range(-1.0f32..1.0);
    let vel = polar_to_cartesian(speed, heading);

    let radius = rng.random_range(ASTEROID_RADIUS_MIN..=ASTEROID_RADIUS_MAX);

    // Sorted so edges connect in angular order and never self-intersect
    let num_vertices = rng.random_range(ASTEROID_VERTICES_MIN..=ASTEROID_VERTICES_MAX);
    let mut shape: Vec<f32> = (0..num_vertices).map(|_| random_angle(rng)).collect();
    shape.sort_by(f32::total_cmp);

    let mut asteroid = Body::new(id, BodyKind::Asteroid, pos, vel, radius, heading, shape);
    asteroid.rotational_vel = rng.random_range(-ASTEROID_MAX_SPIN..=ASTEROID_MAX_SPIN);
    asteroid
}

/// Player ship at rest in the arena center, ready to fire
pub fn ship(id: BodyId, bounds: &Bounds) -> Body {
    Body::new(
        id,
        BodyKind::Ship,
        bounds.center(),
        Vec2::ZERO,
        SHIP_RADIUS,
        SHIP_START_ROTATION,
        SHIP_SHAPE.to_vec(),
    )
}

/// Bullet leaving the firing body's nose along its heading
pub fn bullet<R: Rng>(rng: &mut R, id: BodyId, origin: &Body) -> Body {
    let nose = origin.world_vertex(SHIP_NOSE_VERTEX.min(origin.shape.len() - 1));
    let vel = origin.vel + polar_to_cartesian(BULLET_SPEED, origin.rotation);
    let radius = rng.random_range(BULLET_RADIUS_MIN..=BULLET_RADIUS_MAX);

    Body::new(
        id,
        BodyKind::Bullet,
        nose,
        vel,
        radius,
        origin.rotation,
        BULLET_SHAPE.to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Bounds {
        Bounds::from_size(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_random_asteroid_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        let bounds = arena();
        for i in 0..200 {
            let rock = random_asteroid(&mut rng, BodyId(i), &bounds);
            assert_eq!(rock.kind, BodyKind::Asteroid);
            assert!(rock.radius >= ASTEROID_RADIUS_MIN && rock.radius <= ASTEROID_RADIUS_MAX);
            assert!(rock.vel.length() <= ASTEROID_MAX_SPEED + 1e-4);
            assert!(rock.rotational_vel.abs() <= ASTEROID_MAX_SPIN);
            assert!(rock.rotation > -PI && rock.rotation <= PI);
            assert!(
                (ASTEROID_VERTICES_MIN..=ASTEROID_VERTICES_MAX).contains(&rock.shape.len())
            );
            assert!(rock.shape.windows(2).all(|w| w[0] <= w[1]));
            assert!(rock.shape.iter().all(|a| *a > -PI && *a <= PI));
            assert_eq!(rock.time_to_live, None);
        }
    }

    #[test]
    fn test_random_edge_pos_lies_on_perimeter() {
        let mut rng = Pcg32::seed_from_u64(11);
        let bounds = arena();
        let mut vertical = 0;
        let samples = 4000;
        for _ in 0..samples {
            let p = random_edge_pos(&mut rng, &bounds);
            assert!(bounds.contains(p));
            let on_x_edge = p.x == bounds.min.x || p.x == bounds.max.x;
            let on_y_edge = p.y == bounds.min.y || p.y == bounds.max.y;
            assert!(on_x_edge || on_y_edge);
            if on_x_edge {
                vertical += 1;
            }
        }
        // Expected share of vertical edges: 600 / 1400 ≈ 0.43
        let share = vertical as f32 / samples as f32;
        assert!((share - 600.0 / 1400.0).abs() < 0.05, "share = {share}");
    }

    #[test]
    fn test_ship_spawns_centered_at_rest() {
        let ship = ship(BodyId(1), &arena());
        assert_eq!(ship.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ship.vel, Vec2::ZERO);
        assert_eq!(ship.radius, SHIP_RADIUS);
        assert_eq!(ship.shape, SHIP_SHAPE.to_vec());
        assert!(!ship.fire_cooldown_active);
    }

    #[test]
    fn test_bullet_leaves_the_nose() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ship = ship(BodyId(1), &arena());
        ship.rotation = 0.0;
        ship.vel = Vec2::new(1.0, 2.0);

        let shot = bullet(&mut rng, BodyId(2), &ship);
        assert_eq!(shot.kind, BodyKind::Bullet);
        assert!((shot.pos - Vec2::new(415.0, 300.0)).length() < 1e-4);
        assert!((shot.vel - Vec2::new(6.0, 2.0)).length() < 1e-4);
        assert!(shot.radius >= BULLET_RADIUS_MIN && shot.radius <= BULLET_RADIUS_MAX);
        assert_eq!(shot.time_to_live, Some(BULLET_TTL));
        assert_eq!(shot.shape, BULLET_SHAPE.to_vec());
    }
}

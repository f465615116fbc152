//! Moving polygonal bodies
//!
//! Ships, asteroids and bullets share one flat `Body` record. Per-kind
//! behavior (wrap margin, minimum vertex count, lifetime) comes from a
//! static rules table instead of trait objects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::{normalize_angle, polar_to_cartesian};

/// Stable identity of a body within one `Simulation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Body variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Ship,
    Asteroid,
    Bullet,
}

/// Per-kind capabilities
pub struct KindRules {
    /// Fewest vertices a valid shape may have
    pub min_vertices: usize,
    /// Distance past the arena edge before the body wraps
    pub wrap_margin: fn(&Body) -> f32,
    /// Ticks a freshly spawned body lives (`None` = unbounded)
    pub lifetime: Option<u32>,
}

fn radius_margin(body: &Body) -> f32 {
    body.radius
}

fn bullet_margin(_body: &Body) -> f32 {
    BULLET_WRAP_MARGIN
}

static SHIP_RULES: KindRules = KindRules {
    min_vertices: 3,
    wrap_margin: radius_margin,
    lifetime: None,
};

static ASTEROID_RULES: KindRules = KindRules {
    min_vertices: 3,
    wrap_margin: radius_margin,
    lifetime: None,
};

static BULLET_RULES: KindRules = KindRules {
    min_vertices: 2,
    wrap_margin: bullet_margin,
    lifetime: Some(BULLET_TTL),
};

impl BodyKind {
    pub fn rules(self) -> &'static KindRules {
        match self {
            BodyKind::Ship => &SHIP_RULES,
            BodyKind::Asteroid => &ASTEROID_RULES,
            BodyKind::Bullet => &BULLET_RULES,
        }
    }
}

/// Axis-aligned arena rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Arena anchored at the origin with the given size
    pub fn from_size(width: f32, height: f32) -> Result<Self, SimError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(SimError::InvalidBounds { width, height });
        }
        Ok(Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Whether `p` lies inside the rectangle (edges included)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Wrap one coordinate across `[min - margin, max + margin]`
#[inline]
pub fn wrap_axis(value: f32, min: f32, max: f32, margin: f32) -> f32 {
    let span = max - min + 2.0 * margin;
    if value > max + margin {
        value - span
    } else if value < min - margin {
        value + span
    } else {
        value
    }
}

/// A moving polygonal entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub pos: Vec2,
    /// Units per tick
    pub vel: Vec2,
    /// Bounding-circle radius, also the vertex distance from `pos`
    pub radius: f32,
    /// Radians in (-π, π]
    pub rotation: f32,
    /// Radians per tick
    pub rotational_vel: f32,
    /// Vertex angles relative to `rotation`
    pub shape: Vec<f32>,
    /// Remaining ticks (bullets only)
    pub time_to_live: Option<u32>,
    /// Ship may not fire while set
    pub fire_cooldown_active: bool,
}

impl Body {
    /// Build a body, panicking on a malformed radius or shape
    pub fn new(
        id: BodyId,
        kind: BodyKind,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        rotation: f32,
        shape: Vec<f32>,
    ) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "body {id:?} radius must be positive, got {radius}"
        );
        assert!(
            shape.len() >= kind.rules().min_vertices,
            "{kind:?} {id:?} needs at least {} vertices, got {}",
            kind.rules().min_vertices,
            shape.len()
        );
        Self {
            id,
            kind,
            pos,
            vel,
            radius,
            rotation: normalize_angle(rotation),
            rotational_vel: 0.0,
            shape,
            time_to_live: kind.rules().lifetime,
            fire_cooldown_active: false,
        }
    }

    /// Margin this body wraps with
    #[inline]
    pub fn wrap_margin(&self) -> f32 {
        (self.kind.rules().wrap_margin)(self)
    }

    /// Move by one tick of velocity without wrapping
    #[inline]
    pub fn translate(&mut self) {
        self.pos += self.vel;
    }

    /// Move by one tick of velocity, then wrap each axis independently
    pub fn advance(&mut self, bounds: &Bounds, wrap_margin: f32) {
        self.translate();
        self.wrap(bounds, wrap_margin);
    }

    /// Teleport to the opposite edge once past `bounds` by more than `wrap_margin`
    pub fn wrap(&mut self, bounds: &Bounds, wrap_margin: f32) {
        self.pos.x = wrap_axis(self.pos.x, bounds.min.x, bounds.max.x, wrap_margin);
        self.pos.y = wrap_axis(self.pos.y, bounds.min.y, bounds.max.y, wrap_margin);
    }

    /// Apply one tick of rotational velocity
    pub fn spin(&mut self) {
        self.rotate(self.rotational_vel);
    }

    /// Turn by `delta` radians, keeping rotation in (-π, π]
    pub fn rotate(&mut self, delta: f32) {
        self.rotation = normalize_angle(self.rotation + delta);
    }

    /// Add `amount` along the current heading
    pub fn thrust(&mut self, amount: f32) {
        self.vel += polar_to_cartesian(amount, self.rotation);
    }

    /// Rescale velocity down to `cap` if it is faster
    pub fn clamp_speed(&mut self, cap: f32) {
        let speed = self.vel.length();
        if speed > cap {
            self.vel *= cap / speed;
        }
    }

    /// Count down one tick of lifetime. Returns false once the body has expired.
    ///
    /// Bodies without a lifetime never expire.
    pub fn tick_lifetime(&mut self) -> bool {
        match self.time_to_live.as_mut() {
            Some(ttl) => {
                assert!(*ttl > 0, "{:?} {:?} ticked past expiry", self.kind, self.id);
                *ttl -= 1;
                *ttl > 0
            }
            None => true,
        }
    }

    /// World position of vertex `i`
    #[inline]
    pub fn world_vertex(&self, i: usize) -> Vec2 {
        self.pos + polar_to_cartesian(self.radius, self.rotation + self.shape[i])
    }

    /// All vertices in world space, in shape order
    pub fn world_vertices(&self) -> Vec<Vec2> {
        (0..self.shape.len()).map(|i| self.world_vertex(i)).collect()
    }

    /// Closed polygon outline, including the edge from the last vertex back to the first
    pub fn edges(&self) -> Vec<(Vec2, Vec2)> {
        let vertices = self.world_vertices();
        let n = vertices.len();
        (0..n).map(|i| (vertices[i], vertices[(i + 1) % n])).collect()
    }
}

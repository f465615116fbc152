//! Shape descriptors for 2D bodies
//!
//! Outlines are world-space vertex lists in polygon order; the host strokes
//! each one as a closed path. Bullets are drawn as filled discs: their
//! outline is a circle approximation, and center and radius travel with it.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::sim::{Body, BodyId, BodyKind, RoundPhase, Simulation};

/// Vertices in a bullet's disc outline
pub const BULLET_OUTLINE_SEGMENTS: u32 = 8;

/// One drawable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawShape {
    pub id: BodyId,
    pub kind: BodyKind,
    pub center: Vec2,
    pub radius: f32,
    /// World-space vertices; the last connects back to the first
    pub outline: Vec<Vec2>,
}

impl DrawShape {
    /// Whether the host should fill a disc instead of stroking the outline
    pub fn is_disc(&self) -> bool {
        self.kind == BodyKind::Bullet
    }
}

/// Everything the host needs to draw one frame and update its HUD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    /// Draw order: ship, asteroids, bullets
    pub shapes: Vec<DrawShape>,
    pub score: u64,
    pub phase: RoundPhase,
}

/// Outline descriptor for a single body
pub fn body_shape(body: &Body) -> DrawShape {
    DrawShape {
        id: body.id,
        kind: body.kind,
        center: body.pos,
        radius: body.radius,
        outline: match body.kind {
            BodyKind::Bullet => circle_outline(body.pos, body.radius, BULLET_OUTLINE_SEGMENTS),
            _ => body.world_vertices(),
        },
    }
}

/// Snapshot the simulation for drawing
pub fn frame_view(sim: &Simulation) -> FrameView {
    FrameView {
        shapes: sim.bodies().map(body_shape).collect(),
        score: sim.score,
        phase: sim.phase,
    }
}

/// Closed polygon approximating a circle, for hosts without a native disc primitive
pub fn circle_outline(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * TAU;
            center + Vec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{TickInput, start_round, tick};

    #[test]
    fn test_frame_view_draw_order_and_outlines() {
        let mut sim = start_round(4, 800.0, 600.0, Settings::default(), 21).unwrap();
        sim.asteroids.iter_mut().for_each(|a| a.pos = glam::Vec2::new(50.0, 50.0));
        tick(
            &mut sim,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );

        let view = frame_view(&sim);
        assert_eq!(view.phase, sim.phase);
        assert_eq!(view.score, sim.score);
        assert_eq!(view.shapes.len(), 1 + sim.asteroids.len() + sim.bullets.len());
        assert_eq!(view.shapes[0].kind, BodyKind::Ship);
        assert_eq!(view.shapes[0].outline.len(), 3);

        let last = view.shapes.last().unwrap();
        assert_eq!(last.kind, BodyKind::Bullet);
        assert!(last.is_disc());
        assert_eq!(last.outline.len(), BULLET_OUTLINE_SEGMENTS as usize);
        for p in &last.outline {
            assert!(((*p - last.center).length() - last.radius).abs() < 1e-3);
        }

        for (shape, asteroid) in view.shapes[1..].iter().zip(&sim.asteroids) {
            assert_eq!(shape.id, asteroid.id);
            assert_eq!(shape.outline, asteroid.world_vertices());
        }
    }

    #[test]
    fn test_frame_view_serializes() {
        let sim = start_round(2, 800.0, 600.0, Settings::default(), 4).unwrap();
        let json = serde_json::to_string(&frame_view(&sim)).expect("serializable");
        assert!(json.contains("\"Running\""));
        assert!(json.contains("\"Ship\""));
    }

    #[test]
    fn test_circle_outline() {
        let points = circle_outline(Vec2::new(10.0, 10.0), 2.0, 16);
        assert_eq!(points.len(), 16);
        for p in points {
            assert!(((p - Vec2::new(10.0, 10.0)).length() - 2.0).abs() < 1e-4);
        }
        assert_eq!(circle_outline(Vec2::ZERO, 1.0, 1).len(), 3);
    }
}

//! Body-vs-body collision detection
//!
//! Two stages: a bounding-circle check, then an exact test on the outlines.
//! Outlines collide when any edge of one crosses any edge of the other, or
//! when one outline encloses the other's center or one of its vertices. The
//! containment half catches a body sitting wholly inside a larger one.

use std::collections::BTreeSet;

use super::body::{Body, BodyId};
use super::geometry::{point_in_polygon, segments_intersect};

/// Bounding circles touch or overlap
#[inline]
pub fn broad_phase(a: &Body, b: &Body) -> bool {
    a.pos.distance(b.pos) <= a.radius + b.radius
}

/// Bounding circles overlap and the outlines cross or one contains the other
pub fn narrow_phase(a: &Body, b: &Body) -> bool {
    if !broad_phase(a, b) {
        return false;
    }

    assert!(
        a.shape.len() >= 2 && b.shape.len() >= 2,
        "narrow phase needs outlines: {:?} has {}, {:?} has {} vertices",
        a.id,
        a.shape.len(),
        b.id,
        b.shape.len()
    );

    let b_edges = b.edges();
    let crossing = a.edges().iter().any(|&(a1, a2)| {
        b_edges
            .iter()
            .any(|&(b1, b2)| segments_intersect(a1, a2, b1, b2))
    });
    crossing || encloses(a, b) || encloses(b, a)
}

/// `outer`'s outline contains `inner`'s center or any of its vertices
fn encloses(outer: &Body, inner: &Body) -> bool {
    let outline = outer.world_vertices();
    point_in_polygon(inner.pos, &outline)
        || (0..inner.shape.len()).any(|i| point_in_polygon(inner.world_vertex(i), &outline))
}

/// Ids of every candidate the subject collides with
///
/// Returning identities rather than positions keeps the result valid while
/// the caller removes bodies from its collections.
pub fn collisions_against<'a, I>(subject: &Body, candidates: I) -> BTreeSet<BodyId>
where
    I: IntoIterator<Item = &'a Body>,
{
    candidates
        .into_iter()
        .filter(|candidate| narrow_phase(subject, candidate))
        .map(|candidate| candidate.id)
        .collect()
}

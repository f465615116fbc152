//! Line and segment intersection
//!
//! Segment crossing is decided by intersecting the two infinite lines and
//! then checking the point against both segments' axis-aligned bounding
//! boxes. This is not a parametric test: an axis-parallel segment has a
//! zero-width box, so rounding in the intersection point can reject a true
//! crossing. The behavior is kept as-is.

use glam::Vec2;

/// Intersection point of the infinite lines through `a1-a2` and `b1-b2`.
///
/// Returns `None` when the lines are parallel, i.e. the determinant is
/// exactly zero. There is no epsilon.
pub fn intersect_lines(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> Option<Vec2> {
    let denom = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if denom == 0.0 {
        return None;
    }

    let a_cross = a1.x * a2.y - a1.y * a2.x;
    let b_cross = b1.x * b2.y - b1.y * b2.x;

    let x = (a_cross * (b1.x - b2.x) - (a1.x - a2.x) * b_cross) / denom;
    let y = (a_cross * (b1.y - b2.y) - (a1.y - a2.y) * b_cross) / denom;
    Some(Vec2::new(x, y))
}

/// Whether segment `a1-a2` crosses segment `b1-b2`
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    match intersect_lines(a1, a2, b1, b2) {
        Some(p) => in_bounding_box(p, a1, a2) && in_bounding_box(p, b1, b2),
        None => false,
    }
}

/// Whether `p` lies inside the axis-aligned box spanned by `c1` and `c2` (inclusive)
#[inline]
fn in_bounding_box(p: Vec2, c1: Vec2, c2: Vec2) -> bool {
    let min = c1.min(c2);
    let max = c1.max(c2);
    p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
}

/// Whether `point` lies inside the closed `polygon` (even-odd ray cast toward +x).
///
/// Outlines with fewer than three vertices enclose nothing.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = pj.x + (point.y - pj.y) / (pi.y - pj.y) * (pi.x - pj.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_lines_crossing() {
        let p = intersect_lines(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 0.0),
        )
        .expect("lines cross");
        assert!((p - Vec2::new(1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_intersect_lines_parallel() {
        assert!(
            intersect_lines(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_parallel_segments_never_collide() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ));
        // Collinear overlap is parallel too
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(3.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 3.0),
            Vec2::new(0.0, 3.0),
            Vec2::new(4.0, 0.0),
        ));
    }

    #[test]
    fn test_segments_lines_cross_outside_segments() {
        // Lines meet at (5, 5), beyond both segments
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(9.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_touching_at_endpoint() {
        // Box test is inclusive
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(4.0, 0.0),
        ));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        assert!(point_in_polygon(Vec2::new(2.0, 1.5), &square));
        assert!(!point_in_polygon(Vec2::new(5.0, 1.5), &square));
        assert!(!point_in_polygon(Vec2::new(-1.0, 1.5), &square));

        // Two-point outline has no interior
        let segment = [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
        assert!(!point_in_polygon(Vec2::ZERO, &segment));
    }
}

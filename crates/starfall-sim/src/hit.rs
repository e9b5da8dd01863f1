//! World-space hit geometry and intersection tests.
//!
//! A `HitBox` is stored relative to its owner; `HitGeometry` is the same shape
//! placed in the world for this tick. Touching shapes count as intersecting.

use glam::Vec2;

use starfall_core::components::{HitBox, HitShape};
use starfall_core::types::facing;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitGeometry {
    Segment { a: Vec2, b: Vec2 },
    Circle { center: Vec2, radius: f32 },
}

impl HitGeometry {
    /// Place a hitbox at its owner's position and rotation.
    pub fn place(hitbox: &HitBox, position: Vec2, rotation: f32) -> Self {
        match hitbox.shape {
            HitShape::Line { half_length } => {
                let half = facing(rotation) * half_length;
                HitGeometry::Segment {
                    a: position - half,
                    b: position + half,
                }
            }
            HitShape::Circle { radius } => HitGeometry::Circle {
                center: position,
                radius,
            },
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, HitGeometry::Circle { .. })
    }
}

/// Whether two placed shapes overlap.
pub fn intersects(lhs: &HitGeometry, rhs: &HitGeometry) -> bool {
    match (*lhs, *rhs) {
        (HitGeometry::Segment { a: a1, b: b1 }, HitGeometry::Segment { a: a2, b: b2 }) => {
            segments_intersect(a1, b1, a2, b2)
        }
        (HitGeometry::Segment { a, b }, HitGeometry::Circle { center, radius })
        | (HitGeometry::Circle { center, radius }, HitGeometry::Segment { a, b }) => {
            segment_circle(a, b, center, radius)
        }
        (
            HitGeometry::Circle {
                center: c1,
                radius: r1,
            },
            HitGeometry::Circle {
                center: c2,
                radius: r2,
            },
        ) => {
            let reach = r1 + r2;
            c1.distance_squared(c2) <= reach * reach
        }
    }
}

/// Closest point on segment `ab` to `p`.
fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

fn segment_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    closest_point_on_segment(a, b, center).distance_squared(center) <= radius * radius
}

/// Sign of the turn a → b → c: positive counter-clockwise, zero collinear.
fn orientation(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (b - a).perp_dot(c - a)
}

/// `p` is collinear with `ab`; is it within the segment's bounds?
fn within_bounds(a: Vec2, b: Vec2, p: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);

    if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
        return true;
    }

    // Endpoint touching or collinear overlap
    (d1 == 0.0 && within_bounds(p3, p4, p1))
        || (d2 == 0.0 && within_bounds(p3, p4, p2))
        || (d3 == 0.0 && within_bounds(p1, p2, p3))
        || (d4 == 0.0 && within_bounds(p1, p2, p4))
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn circle(x: f32, y: f32, radius: f32) -> HitGeometry {
        HitGeometry::Circle {
            center: Vec2::new(x, y),
            radius,
        }
    }

    fn segment(ax: f32, ay: f32, bx: f32, by: f32) -> HitGeometry {
        HitGeometry::Segment {
            a: Vec2::new(ax, ay),
            b: Vec2::new(bx, by),
        }
    }

    #[test]
    fn line_is_placed_along_facing() {
        let hb = HitBox::line(10.0, 1);
        let placed = HitGeometry::place(&hb, Vec2::new(5.0, 5.0), 0.0);
        assert_eq!(placed, segment(5.0, 15.0, 5.0, -5.0));

        // Quarter turn lays the segment horizontally.
        match HitGeometry::place(&hb, Vec2::ZERO, FRAC_PI_2) {
            HitGeometry::Segment { a, b } => {
                assert!((a - Vec2::new(-10.0, 0.0)).length() < 1e-4);
                assert!((b - Vec2::new(10.0, 0.0)).length() < 1e-4);
            }
            other => panic!("expected a segment, got {other:?}"),
        }
    }

    #[test]
    fn circle_circle() {
        assert!(intersects(&circle(0.0, 0.0, 10.0), &circle(5.0, 0.0, 10.0)));
        assert!(intersects(&circle(0.0, 0.0, 10.0), &circle(20.0, 0.0, 10.0)));
        assert!(!intersects(&circle(0.0, 0.0, 10.0), &circle(20.1, 0.0, 10.0)));
    }

    #[test]
    fn line_circle_is_symmetric() {
        let seg = segment(-10.0, 5.0, 10.0, 5.0);
        let near = circle(0.0, 0.0, 6.0);
        let far = circle(0.0, 0.0, 4.0);
        assert!(intersects(&seg, &near));
        assert!(intersects(&near, &seg));
        assert!(!intersects(&seg, &far));
        assert!(!intersects(&far, &seg));
    }

    #[test]
    fn line_circle_uses_segment_ends() {
        // Circle beyond the end of the segment along its axis.
        let seg = segment(0.0, 0.0, 10.0, 0.0);
        assert!(!intersects(&seg, &circle(15.0, 0.0, 4.0)));
        assert!(intersects(&seg, &circle(13.0, 0.0, 4.0)));
    }

    #[test]
    fn line_line_crossing_and_parallel() {
        let horizontal = segment(-5.0, 0.0, 5.0, 0.0);
        let vertical = segment(0.0, -5.0, 0.0, 5.0);
        let parallel = segment(-5.0, 1.0, 5.0, 1.0);
        let short = segment(0.0, 1.0, 0.0, 5.0);
        assert!(intersects(&horizontal, &vertical));
        assert!(!intersects(&horizontal, &parallel));
        assert!(!intersects(&horizontal, &short));
    }

    #[test]
    fn line_line_touching_and_collinear() {
        let a = segment(0.0, 0.0, 4.0, 0.0);
        assert!(intersects(&a, &segment(4.0, 0.0, 4.0, 3.0)));
        assert!(intersects(&a, &segment(2.0, 0.0, 8.0, 0.0)));
        assert!(!intersects(&a, &segment(5.0, 0.0, 8.0, 0.0)));
    }

    #[test]
    fn degenerate_line_acts_as_point() {
        let dot = segment(1.0, 1.0, 1.0, 1.0);
        assert!(intersects(&dot, &circle(0.0, 0.0, 2.0)));
        assert!(!intersects(&dot, &circle(5.0, 5.0, 2.0)));
    }
}

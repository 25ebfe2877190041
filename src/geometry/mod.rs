mod circle;
mod polyline;
mod segment;

pub use circle::Circle;
pub use polyline::Polyline;
pub use segment::Segment;

use crate::math::Point2;

/// A planar primitive of statically-unknown kind.
///
/// Each unordered pair of kinds has exactly one intersection
/// implementation; the three reversed orderings swap operands and reuse
/// it, so `a.intersect(&b)` and `b.intersect(&a)` report the same point
/// set regardless of argument order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A line segment.
    Segment(Segment),
    /// A chain of line segments.
    Polyline(Polyline),
    /// A full circle.
    Circle(Circle),
}

impl Primitive {
    /// Intersects two primitives without knowing their concrete kinds.
    ///
    /// Every query is a pure function of its operands: results are newly
    /// allocated, nothing is mutated, and repeated calls return identical
    /// points.
    #[must_use]
    pub fn intersect(&self, other: &Primitive) -> Vec<Point2> {
        match (self, other) {
            (Primitive::Segment(a), Primitive::Segment(b)) => a.intersect_segment(b),
            (Primitive::Segment(a), Primitive::Polyline(b)) => a.intersect_polyline(b),
            (Primitive::Segment(a), Primitive::Circle(b)) => a.intersect_circle(b),
            (Primitive::Polyline(a), Primitive::Segment(b)) => a.intersect_segment(b),
            (Primitive::Polyline(a), Primitive::Polyline(b)) => a.intersect_polyline(b),
            (Primitive::Polyline(a), Primitive::Circle(b)) => a.intersect_circle(b),
            (Primitive::Circle(a), Primitive::Segment(b)) => a.intersect_segment(b),
            (Primitive::Circle(a), Primitive::Polyline(b)) => a.intersect_polyline(b),
            (Primitive::Circle(a), Primitive::Circle(b)) => a.intersect_circle(b),
        }
    }

    /// Returns the length of the primitive.
    ///
    /// For a circle this is the circumference.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Primitive::Segment(s) => s.length(),
            Primitive::Polyline(p) => p.length(),
            Primitive::Circle(c) => c.length(),
        }
    }
}

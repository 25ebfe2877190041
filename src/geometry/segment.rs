use crate::math::{intersect_2d, Point2};

use super::{Circle, Polyline};

/// A line segment bounded by two endpoints.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t`
/// in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment between two endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Evaluates the segment at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    /// Returns the Euclidean distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Intersects this segment with another segment.
    ///
    /// At most one point; parallel and degenerate pairs report none.
    #[must_use]
    pub fn intersect_segment(&self, other: &Segment) -> Vec<Point2> {
        intersect_2d::segment_segment_intersect_2d(
            &self.start,
            &self.end,
            &other.start,
            &other.end,
        )
        .into_iter()
        .collect()
    }

    /// Intersects this segment with each segment of a polyline, in
    /// traversal order.
    ///
    /// Hits are not deduplicated: a crossing that lands on a shared
    /// polyline vertex is reported once per adjacent segment.
    #[must_use]
    pub fn intersect_polyline(&self, polyline: &Polyline) -> Vec<Point2> {
        let mut result = Vec::new();
        for seg in polyline.segments() {
            result.extend(self.intersect_segment(&seg));
        }
        result
    }

    /// Intersects this segment with a circle. Up to two points.
    #[must_use]
    pub fn intersect_circle(&self, circle: &Circle) -> Vec<Point2> {
        intersect_2d::segment_circle_intersect_2d(
            &self.start,
            &self.end,
            circle.center(),
            circle.radius(),
        )
    }
}

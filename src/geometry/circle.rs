use crate::error::{GeometryError, Result};
use crate::math::{intersect_2d, Point2};

use super::{Polyline, Segment};

/// A full circle defined by a center and radius.
///
/// A zero radius is allowed and describes a degenerate point-circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the circumference.
    #[must_use]
    pub fn length(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }

    /// Intersects this circle with a segment.
    ///
    /// Redirects to [`Segment::intersect_circle`] with swapped operands.
    #[must_use]
    pub fn intersect_segment(&self, segment: &Segment) -> Vec<Point2> {
        segment.intersect_circle(self)
    }

    /// Intersects this circle with a polyline.
    ///
    /// Redirects to [`Polyline::intersect_circle`] with swapped operands.
    #[must_use]
    pub fn intersect_polyline(&self, polyline: &Polyline) -> Vec<Point2> {
        polyline.intersect_circle(self)
    }

    /// Intersects this circle with another circle.
    ///
    /// Up to two points; tangent circles report one, while separated,
    /// contained, and coincident circles report none.
    #[must_use]
    pub fn intersect_circle(&self, other: &Circle) -> Vec<Point2> {
        intersect_2d::circle_circle_intersect_2d(
            &self.center,
            self.radius,
            &other.center,
            other.radius,
        )
    }
}

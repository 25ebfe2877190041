use super::{cross_2d, Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Both segments are parametrized as `start + t * (end - start)` and the
/// resulting 2x2 system is solved with the cross product as determinant.
/// Returns `None` for parallel or degenerate segments.
///
/// A parameter is rejected only when `|t| > 1 + TOLERANCE`, so the accepted
/// window is `[-(1 + TOLERANCE), 1 + TOLERANCE]` on both segments. Points
/// extrapolated up to one span behind a segment's start are therefore
/// admitted; callers relying on exact endpoint clipping must filter the
/// result themselves.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<Point2> {
    let r1 = a1 - a0;
    let r2 = b1 - b0;

    let d = cross_2d(&r1, &r2);
    if d.abs() < TOLERANCE {
        return None;
    }

    let offset = b0 - a0;
    let t1 = cross_2d(&offset, &r2) / d;
    let t2 = cross_2d(&offset, &r1) / d;
    if t1.abs() > 1.0 + TOLERANCE || t2.abs() > 1.0 + TOLERANCE {
        return None;
    }

    Some(a0 + r1 * t1)
}

/// Segment-circle intersection in 2D.
///
/// Substitutes the segment parametrized from its end, `P(t) = a1 + t * d2`
/// with `d2 = a1 - a0` and `t` in `[-1, 0]`, into the circle equation.
/// This yields a quadratic whose roots are filtered against that window
/// (widened by [`TOLERANCE`] on both sides). Up to two points, in
/// ascending-root order.
///
/// A discriminant below [`TOLERANCE`] reports no points, so a segment that
/// merely grazes the circle yields an empty result.
#[must_use]
pub fn segment_circle_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
) -> Vec<Point2> {
    let mut result = Vec::new();
    let d1 = a1 - center;
    let d2 = a1 - a0;

    let a = d2.dot(&d2);
    let b = 2.0 * d1.dot(&d2);
    let c = d1.dot(&d1) - radius * radius;

    let disc = b * b - 4.0 * a * c;
    if disc < TOLERANCE {
        return result;
    }
    let root = disc.sqrt();

    for t in [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)] {
        if t < TOLERANCE && t > -1.0 - TOLERANCE {
            result.push(a1 + d2 * t);
        }
    }
    result
}

/// Circle-circle intersection in 2D.
///
/// Separated, contained, and coincident circles yield no points. Otherwise
/// the intersection points lie on the radical line, at distance `a` from
/// the first center along the center axis and offset perpendicular to it
/// by the half-chord `h`. A tangency (`|a - r1| <= TOLERANCE`) yields a
/// single point.
#[must_use]
pub fn circle_circle_intersect_2d(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> Vec<Point2> {
    let mut result = Vec::new();
    let axis = c2 - c1;
    let d = axis.norm();

    if d > r1 + r2 + TOLERANCE
        || d < (r1 - r2).abs() + TOLERANCE
        || (d.abs() < TOLERANCE && (r1 - r2).abs() < TOLERANCE)
    {
        return result;
    }

    // Distance from c1 to the radical line, and the half-chord length.
    // r1^2 - a^2 can dip just below zero within tolerance of a tangency.
    let a = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let mid = c1 + axis * (a / d);
    result.push(Point2::new(mid.x + h * axis.y / d, mid.y - h * axis.x / d));
    if (a - r1).abs() > TOLERANCE {
        result.push(Point2::new(mid.x - h * axis.y / d, mid.y + h * axis.x / d));
    }
    result
}

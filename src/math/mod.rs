pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-5;

/// 2D cross product `a.x * b.y - a.y * b.x`.
///
/// The scalar result is the signed area of the parallelogram spanned by
/// `a` and `b`; its sign gives the orientation of the pair.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Coordinate-wise tolerance equality for 2D points.
///
/// Two points are equal iff both coordinate differences are below
/// [`TOLERANCE`].
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Appends `point` unless an equal point (under [`points_equal`]) is
/// already present.
pub fn push_unique(points: &mut Vec<Point2>, point: Point2) {
    if !points.iter().any(|p| points_equal(p, &point)) {
        points.push(point);
    }
}

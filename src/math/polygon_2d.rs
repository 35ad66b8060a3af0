use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame. Frame geometry lives in
/// screen space (y-down), where a positive result means clockwise on screen.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Removes points that coincide with their predecessor, treating the polygon as closed.
///
/// A degenerate bevel (zero square size) produces such repeats.
#[must_use]
pub fn dedup_closed(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last().is_some_and(|q| coincident(*q, p)) {
            continue;
        }
        out.push(p);
    }
    while out.len() > 1 && out.first().zip(out.last()).is_some_and(|(a, b)| coincident(*a, *b)) {
        out.pop();
    }
    out
}

/// Returns `true` if the two points are within [`TOLERANCE`] of each other.
#[must_use]
pub fn coincident(a: Point2, b: Point2) -> bool {
    let d: Vector2 = b - a;
    d.x.abs() < TOLERANCE && d.y.abs() < TOLERANCE
}

//! Inward corner offsetting for straight-edged silhouettes.

use crate::float_types::{EPSILON, Real};
use nalgebra::{Point2, Vector2};

/// Moves `point` along the averaged inward normal of the two edges meeting at
/// it, by `thickness`. Vertices must wind counterclockwise for the normals to
/// point inward.
///
/// Each corner is offset independently; this is not a true polygon offset
/// and does no self-intersection handling. At extreme thickness-to-size
/// ratios the resulting inner polygon may self-intersect or invert; callers
/// accept that as a known edge case. Degenerate (zero-length) edges leave the
/// point unchanged.
pub fn offset_vertex(
    point: Point2<Real>,
    prev: Point2<Real>,
    next: Point2<Real>,
    thickness: Real,
) -> Point2<Real> {
    let v1 = match (point - prev).try_normalize(EPSILON) {
        Some(v) => v,
        None => return point,
    };
    let v2 = match (next - point).try_normalize(EPSILON) {
        Some(v) => v,
        None => return point,
    };
    let n1 = Vector2::new(-v1.y, v1.x);
    let n2 = Vector2::new(-v2.y, v2.x);
    match (n1 + n2).try_normalize(EPSILON) {
        Some(n) => point + n * thickness,
        None => point,
    }
}

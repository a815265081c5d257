//! Curve sampling and interrogation.
//!
//! Curved silhouettes are approximated by discrete point sequences sampled
//! from analytic arcs. Bars that must terminate exactly on a curved boundary
//! resolve their endpoints by scanning the sampled polyline and linearly
//! interpolating the bracketing pair.

use crate::float_types::{EPSILON, Real};
use nalgebra::Point2;

/// Sample count used by every builder. Raising it only smooths curves, it
/// never changes topology.
pub const CURVE_SEGMENTS: usize = 64;

/// Sine exponent of the basket-handle arch; values below 1 flatten the top.
pub const BASKET_HANDLE_EXPONENT: Real = 0.8;

/// Samples `segments + 1` points of the arc
/// `x = rx·cos(θ), y = ry·sin(θ)^exponent` with `θ` linear in the parameter
/// `t ∈ [0, 1]` over `[start_angle, end_angle]`.
///
/// The exponent is only meaningful while `sin(θ) ≥ 0`; callers keep the
/// angular range inside `[0, π]` (or traverse it backwards).
pub fn sample_arc(
    radius_x: Real,
    radius_y: Real,
    start_angle: Real,
    end_angle: Real,
    segments: usize,
    shape_exponent: Real,
) -> Vec<Point2<Real>> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as Real / segments as Real;
        let angle = start_angle + t * (end_angle - start_angle);
        let x = radius_x * angle.cos();
        let y = radius_y * angle.sin().powf(shape_exponent);
        points.push(Point2::new(x, y));
    }
    points
}

/// [`sample_arc`] with a unit exponent: a plain ellipse arc.
pub fn sample_ellipse_arc(
    radius_x: Real,
    radius_y: Real,
    start_angle: Real,
    end_angle: Real,
    segments: usize,
) -> Vec<Point2<Real>> {
    sample_arc(radius_x, radius_y, start_angle, end_angle, segments, 1.0)
}

/// Leftmost and rightmost crossings of the polyline with the horizontal line
/// `y = y_target`, found by interpolating the bracketing sample pairs. Hits
/// at `x < 0` count as the left side. A side the curve never reaches falls
/// back to `∓default_half_width` so bar placement cannot abort the build.
pub fn x_span_at_y(
    points: &[Point2<Real>],
    y_target: Real,
    default_half_width: Real,
) -> (Real, Real) {
    let mut x_left = None;
    let mut x_right = None;

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if (p1.y <= y_target && y_target <= p2.y) || (p2.y <= y_target && y_target <= p1.y) {
            if (p2.y - p1.y).abs() < EPSILON {
                continue;
            }
            let ratio = (y_target - p1.y) / (p2.y - p1.y);
            let x = p1.x + ratio * (p2.x - p1.x);
            if x < 0.0 {
                x_left = Some(x);
            } else {
                x_right = Some(x);
            }
            if x_left.is_some() && x_right.is_some() {
                break;
            }
        }
    }

    if x_left.is_none() || x_right.is_none() {
        tracing::debug!(
            "curve does not reach y={y_target:.3}, clamping to half-width {default_half_width:.3}"
        );
    }
    (
        x_left.unwrap_or(-default_half_width),
        x_right.unwrap_or(default_half_width),
    )
}

/// First crossing of the polyline with the vertical line `x = x_target`.
/// The first bracketing pair wins; sequences that are not monotonic in x may
/// therefore return a geometrically surprising intersection, but never fail.
/// Returns `None` when the polyline never spans the target.
pub fn y_at_x(points: &[Point2<Real>], x_target: Real) -> Option<Real> {
    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        if (p1.x <= x_target && x_target <= p2.x) || (p2.x <= x_target && x_target <= p1.x) {
            if (p2.x - p1.x).abs() < EPSILON {
                return Some(p1.y);
            }
            let ratio = (x_target - p1.x) / (p2.x - p1.x);
            return Some(p1.y + ratio * (p2.y - p1.y));
        }
    }
    None
}

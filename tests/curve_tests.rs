mod support;

use fenestra::curve::{
    BASKET_HANDLE_EXPONENT, CURVE_SEGMENTS, sample_arc, sample_ellipse_arc, x_span_at_y, y_at_x,
};
use fenestra::float_types::{PI, Real, TAU};
use fenestra::offset::offset_vertex;
use nalgebra::{Point2, Vector2};
use proptest::prelude::*;

use crate::support::approx_eq;

#[test]
fn sample_count_is_segments_plus_one() {
    let points = sample_ellipse_arc(1.0, 1.0, 0.0, PI, CURVE_SEGMENTS);
    assert_eq!(points.len(), CURVE_SEGMENTS + 1);
}

#[test]
fn half_ellipse_samples_are_monotonic_in_the_parameter() {
    let points = sample_ellipse_arc(2.0, 1.0, 0.0, PI, CURVE_SEGMENTS);
    for pair in points.windows(2) {
        assert!(pair[0].x > pair[1].x, "x must strictly decrease over [0, pi]");
    }
}

#[test]
fn basket_handle_arc_keeps_apex_and_base() {
    let points = sample_arc(1.5, 1.0, PI, 0.0, CURVE_SEGMENTS, BASKET_HANDLE_EXPONENT);
    assert_eq!(points.len(), CURVE_SEGMENTS + 1);
    // Starts on the left base, apex at mid-parameter, ends on the right base.
    assert!(approx_eq(points[0].x, -1.5, 1e-9));
    assert!(approx_eq(points[0].y, 0.0, 1e-9));
    assert!(approx_eq(points[CURVE_SEGMENTS / 2].y, 1.0, 1e-9));
    assert!(approx_eq(points[CURVE_SEGMENTS].x, 1.5, 1e-9));
    assert!(approx_eq(points[CURVE_SEGMENTS].y, 0.0, 1e-9));
    // The sub-unit exponent flattens the arch: every y stays above the
    // plain ellipse at the same parameter.
    let ellipse = sample_ellipse_arc(1.5, 1.0, PI, 0.0, CURVE_SEGMENTS);
    for (flattened, round) in points.iter().zip(&ellipse) {
        assert!(flattened.y >= round.y - 1e-12);
    }
}

proptest! {
    #[test]
    fn sample_arc_endpoints_match_the_analytic_formula(
        rx in 0.1..10.0_f64,
        ry in 0.1..10.0_f64,
        start in 0.0..3.0_f64,
        sweep in 0.1..3.0_f64,
    ) {
        let rx = rx as Real;
        let ry = ry as Real;
        let start = start as Real;
        let end = start + sweep as Real;
        let points = sample_ellipse_arc(rx, ry, start, end, CURVE_SEGMENTS);
        prop_assert_eq!(points.len(), CURVE_SEGMENTS + 1);
        prop_assert!(approx_eq(points[0].x, rx * start.cos(), 1e-9));
        prop_assert!(approx_eq(points[0].y, ry * start.sin(), 1e-9));
        prop_assert!(approx_eq(points[CURVE_SEGMENTS].x, rx * end.cos(), 1e-9));
        prop_assert!(approx_eq(points[CURVE_SEGMENTS].y, ry * end.sin(), 1e-9));
    }
}

#[test]
fn x_span_round_trips_a_point_on_the_curve() {
    let points = sample_ellipse_arc(2.0, 1.0, 0.0, PI, CURVE_SEGMENTS);
    let probe = Point2::new(2.0 * (PI / 4.0).cos(), (PI / 4.0).sin());
    let (x_left, x_right) = x_span_at_y(&points, probe.y, 2.0);
    // Within one sampling interval's interpolation error of the analytic point.
    assert!(approx_eq(x_right, probe.x, 1e-2));
    assert!(approx_eq(x_left, -probe.x, 1e-2));
}

#[test]
fn x_span_falls_back_to_the_default_half_width() {
    let points = sample_ellipse_arc(2.0, 1.0, 0.0, PI, CURVE_SEGMENTS);
    // Above the apex the curve is never reached on either side.
    let (x_left, x_right) = x_span_at_y(&points, 5.0, 7.5);
    assert_eq!(x_left, -7.5);
    assert_eq!(x_right, 7.5);
}

#[test]
fn y_at_x_round_trips_a_point_on_the_curve() {
    let points = sample_ellipse_arc(2.0, 1.0, 0.0, PI, CURVE_SEGMENTS);
    let probe = Point2::new(2.0 * (2.0 * PI / 3.0).cos(), (2.0 * PI / 3.0).sin());
    let y = y_at_x(&points, probe.x).expect("probe x lies inside the span");
    assert!(approx_eq(y, probe.y, 1e-2));
}

#[test]
fn y_at_x_is_none_outside_the_span() {
    let points = sample_ellipse_arc(2.0, 1.0, 0.0, PI, CURVE_SEGMENTS);
    assert_eq!(y_at_x(&points, 2.5), None);
    assert_eq!(y_at_x(&points, -2.5), None);
}

#[test]
fn y_at_x_keeps_first_match_semantics_on_closed_curves() {
    // A closed ring crosses any interior vertical line twice; the scan stops
    // at the first bracketing pair, which for this ring is the upper
    // crossing. Documented behavior, not a guaranteed "correct" pick.
    let points = sample_ellipse_arc(1.0, 1.0, 0.0, TAU, CURVE_SEGMENTS);
    let y = y_at_x(&points, 0.0).expect("ring spans x = 0");
    assert!(approx_eq(y, 1.0, 1e-2));
}

#[test]
fn offset_vertex_preserves_the_centroid_of_a_square() {
    let square = [
        Point2::new(-1.0, -1.0),
        Point2::new(1.0, -1.0),
        Point2::new(1.0, 1.0),
        Point2::new(-1.0, 1.0),
    ];
    let inner: Vec<Point2<Real>> = (0..4)
        .map(|i| offset_vertex(square[i], square[(i + 3) % 4], square[(i + 1) % 4], 0.2))
        .collect();
    let centroid = inner
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<Real>, p| acc + p.coords)
        / 4.0;
    assert!(approx_eq(centroid.x, 0.0, 1e-12));
    assert!(approx_eq(centroid.y, 0.0, 1e-12));
    for (corner, moved) in square.iter().zip(&inner) {
        assert!(moved.coords.norm() < corner.coords.norm());
    }
}

#[test]
fn offset_vertex_leaves_degenerate_corners_alone() {
    let p = Point2::new(1.0, 1.0);
    assert_eq!(offset_vertex(p, p, Point2::new(2.0, 1.0), 0.1), p);
}

//! Test support library
//! Provides various helper functions & utilities for tests.

use fenestra::float_types::Real;
use fenestra::{GeometryGroup, LineSegment};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// All dashed line segments of a group (opening indicators).
pub fn dashed_segments(group: &GeometryGroup) -> Vec<&LineSegment> {
    group
        .segments()
        .filter(|segment| segment.material.is_dashed())
        .collect()
}

/// Line segments sitting on the given render layer.
pub fn segments_at_layer(group: &GeometryGroup, layer: Real) -> Vec<&LineSegment> {
    group
        .segments()
        .filter(|segment| approx_eq(segment.layer, layer, 1e-12))
        .collect()
}

//! Shape builders, one per silhouette, plus the dispatching composer.
//!
//! Each builder composes outline, glazing pane, opening indicator, and bar
//! layout into one [`GeometryGroup`]. Builders are independent of each other
//! and share only the pure helpers below.

mod basket_handle;
mod circle;
mod half_moon;
mod pentagon;
mod rectangle;
mod segment_arch;
mod trapezoid;
mod triangle;

use crate::curve::{x_span_at_y, y_at_x};
use crate::float_types::Real;
use crate::group::{GeometryGroup, Material};
use crate::params::{FrameParameters, ShapeKind};
use crate::style::FrameStyle;
use geo::{LineString, Polygon};
use nalgebra::Point2;

/// Render-order offset of the glazing pane. Higher layers draw on top.
pub const GLASS_LAYER: Real = 0.01;
/// Render-order offset of glazing bars on straight-edged silhouettes.
pub const GLAZING_BAR_LAYER: Real = 0.02;
/// Render-order offset of the opening indicator.
pub const INDICATOR_LAYER: Real = 0.03;
/// Render-order offset of glazing bars on curved silhouettes.
pub const CURVED_GLAZING_BAR_LAYER: Real = 0.04;
/// Render-order offset of structural stiles and rails.
pub const STRUCTURAL_BAR_LAYER: Real = 0.05;
/// Render-order offset of the sash ring.
pub const SASH_LAYER: Real = 0.1;

// Dash/gap lengths of the indicator patterns. Straight-edged silhouettes use
// the fine pattern, curved ones the coarse pattern.
pub(crate) const FINE_DASH: Real = 0.05;
pub(crate) const COARSE_DASH: Real = 0.1;

/// Builds the frame geometry for `shape`, forwarding the shared parameter
/// set unchanged. Dispatch is exhaustive over [`ShapeKind`]; parameter
/// violations are logged, never propagated, and the selected builder runs
/// best-effort regardless.
pub fn compose_frame(
    shape: ShapeKind,
    params: &FrameParameters,
    style: &FrameStyle,
) -> GeometryGroup {
    if let Err(reason) = params.validate() {
        tracing::warn!("building frame with degenerate parameters: {reason}");
    }
    match shape {
        ShapeKind::Rectangle => GeometryGroup::rectangle_frame(params, style),
        ShapeKind::Circle => GeometryGroup::circle_frame(params, style),
        ShapeKind::HalfMoon => GeometryGroup::half_moon_frame(params, style),
        ShapeKind::Trapezoid => GeometryGroup::trapezoid_frame(params, style),
        ShapeKind::Pentagon => GeometryGroup::pentagon_frame(params, style),
        ShapeKind::Triangle => GeometryGroup::triangle_frame(params, style),
        ShapeKind::BasketHandleArch => GeometryGroup::basket_handle_frame(params, style),
        ShapeKind::SegmentTopArch => GeometryGroup::segment_arch_frame(params, style),
    }
}

/// Closed ring from an ordered point sequence.
pub(crate) fn ring_string(points: &[Point2<Real>]) -> LineString<Real> {
    let mut coords: Vec<(Real, Real)> = points.iter().map(|p| (p.x, p.y)).collect();
    if coords.first() != coords.last() {
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
    }
    LineString::from(coords)
}

/// Simple filled polygon from its boundary points.
pub(crate) fn region(outer: &[Point2<Real>]) -> Polygon<Real> {
    Polygon::new(ring_string(outer), vec![])
}

/// Ring-shaped region: `outer` boundary with `hole` cut out.
pub(crate) fn ring_region(outer: &[Point2<Real>], hole: &[Point2<Real>]) -> Polygon<Real> {
    Polygon::new(ring_string(outer), vec![ring_string(hole)])
}

/// Axis-aligned rectangle centered on `(cx, cy)`.
pub(crate) fn centered_rect(cx: Real, cy: Real, width: Real, height: Real) -> Polygon<Real> {
    let hw = width / 2.0;
    let hh = height / 2.0;
    region(&[
        Point2::new(cx - hw, cy - hh),
        Point2::new(cx + hw, cy - hh),
        Point2::new(cx + hw, cy + hh),
        Point2::new(cx - hw, cy + hh),
    ])
}

/// Filled quadrilateral, vertices in order.
pub(crate) fn quad(
    a: Point2<Real>,
    b: Point2<Real>,
    c: Point2<Real>,
    d: Point2<Real>,
) -> Polygon<Real> {
    region(&[a, b, c, d])
}

/// Linear interpolation between two points.
pub(crate) fn lerp(a: Point2<Real>, b: Point2<Real>, t: Real) -> Point2<Real> {
    a + (b - a) * t
}

/// Shifts a sampled outline vertically, used by builders whose local origin
/// sits at the panel base.
pub(crate) fn raised(points: Vec<Point2<Real>>, dy: Real) -> Vec<Point2<Real>> {
    points.into_iter().map(|p| Point2::new(p.x, p.y + dy)).collect()
}

/// Horizontal bars anchored on a sampled outline. Bar heights evenly
/// subdivide `[0, y_max]`; endpoints resolve through [`x_span_at_y`], so a
/// bar below or above the curve's reach clamps to the usable half-width
/// instead of aborting the build.
pub(crate) fn push_horizontal_curve_bars(
    group: &mut GeometryGroup,
    points: &[Point2<Real>],
    count: usize,
    base_y: Real,
    default_half_width: Real,
    material: Material,
    layer: Real,
) {
    let y_max = points.iter().fold(0.0, |acc: Real, p| acc.max(p.y));
    for i in 1..=count {
        let t = i as Real / (count + 1) as Real;
        let y_local = t * y_max;
        let (x_left, x_right) = x_span_at_y(points, y_local, default_half_width);
        group.push_segment(
            Point2::new(x_left, base_y + y_local),
            Point2::new(x_right, base_y + y_local),
            material,
            layer,
        );
    }
}

/// Vertical bars rising from the base line to a sampled outline. Bars whose
/// x never crosses the outline are skipped with a warning.
pub(crate) fn push_vertical_curve_bars(
    group: &mut GeometryGroup,
    points: &[Point2<Real>],
    count: usize,
    usable_width: Real,
    base_y: Real,
    material: Material,
    layer: Real,
) {
    for i in 1..=count {
        let t = i as Real / (count + 1) as Real;
        let x = -usable_width / 2.0 + t * usable_width;
        match y_at_x(points, x) {
            Some(y_top) => group.push_segment(
                Point2::new(x, base_y),
                Point2::new(x, base_y + y_top),
                material,
                layer,
            ),
            None => tracing::warn!("x={x:.2} not found on outline, skipping bar"),
        }
    }
}

//! Triangle frame panels.
//!
//! An apex-up isoceles triangle. Vertex order: apex, bottom-left,
//! bottom-right.

use super::{
    FINE_DASH, GLASS_LAYER, GLAZING_BAR_LAYER, INDICATOR_LAYER, SASH_LAYER, STRUCTURAL_BAR_LAYER,
    lerp, quad, region,
};
use crate::curve::{x_span_at_y, y_at_x};
use crate::float_types::Real;
use crate::group::{GeometryGroup, Material};
use crate::params::{FrameParameters, OpeningDirection};
use crate::style::FrameStyle;
use nalgebra::Point2;

fn triangle_vertices(width: Real, height: Real) -> [Point2<Real>; 3] {
    let hw = width / 2.0;
    let hh = height / 2.0;
    [
        Point2::new(0.0, hh),
        Point2::new(-hw, -hh),
        Point2::new(hw, -hh),
    ]
}

impl GeometryGroup {
    /// Builds a triangle frame: three side quads between the outer vertices
    /// and the shrunk inner triangle, a sash ring when openable, the glazing
    /// pane, corner-wired indicator, and bars terminating on the slanted
    /// edges by linear interpolation between the vertices.
    pub fn triangle_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let frame = Material::fill(style.frame_color);

        let outer = triangle_vertices(w, h);
        let inner = triangle_vertices(w - 2.0 * t, h - 2.0 * t);

        for i in 0..3 {
            let next = (i + 1) % 3;
            group.push_region(quad(outer[i], outer[next], inner[next], inner[i]), frame, 0.0);
        }

        let openable = !params.opening.is_fixed();
        let sash_inner = triangle_vertices(w - 2.0 * t - 2.0 * gap, h - 2.0 * t - 2.0 * gap);
        if openable {
            let sash_outer = triangle_vertices(w - 2.0 * gap, h - 2.0 * gap);
            for i in 0..3 {
                let next = (i + 1) % 3;
                group.push_region(
                    quad(sash_outer[i], sash_outer[next], sash_inner[next], sash_inner[i]),
                    frame,
                    SASH_LAYER,
                );
            }
        }

        // Glazing pane.
        group.push_region(region(&inner), Material::fill(style.glass_color), GLASS_LAYER);

        if openable {
            build_opening(&mut group, &sash_inner, params.opening, style);
        }

        // Bars anchored on the inner vertex chains.
        let accent = Material::line(style.accent_color);
        let solid = Material::line(style.frame_color);
        push_horizontal_bars(
            &mut group,
            &inner,
            params.horizontal_glazing_bars,
            w / 2.0 - t,
            accent,
            GLAZING_BAR_LAYER,
        );
        push_vertical_bars(&mut group, &inner, params.vertical_glazing_bars, accent, GLAZING_BAR_LAYER);
        push_horizontal_bars(&mut group, &inner, params.rails, w / 2.0 - t, solid, STRUCTURAL_BAR_LAYER);
        push_vertical_bars(&mut group, &inner, params.stiles, solid, STRUCTURAL_BAR_LAYER);

        group
    }
}

/// Horizontal bars across the closed triangle ring; heights subdivide the
/// glass extent, endpoints interpolate the bracketing edges.
fn push_horizontal_bars(
    group: &mut GeometryGroup,
    inner: &[Point2<Real>; 3],
    count: usize,
    default_half_width: Real,
    material: Material,
    layer: Real,
) {
    let ring = [inner[0], inner[1], inner[2], inner[0]];
    let y_min = inner[1].y;
    let y_max = inner[0].y;
    for i in 1..=count {
        let t = i as Real / (count + 1) as Real;
        let y = y_min + t * (y_max - y_min);
        let (x_left, x_right) = x_span_at_y(&ring, y, default_half_width);
        group.push_segment(
            Point2::new(x_left, y),
            Point2::new(x_right, y),
            material,
            layer,
        );
    }
}

/// Vertical bars rising from the base to the slanted edges. The upper chain
/// bottom-left → apex → bottom-right is monotonic in x, so the bracketing
/// pair interpolation lands on the correct edge.
fn push_vertical_bars(
    group: &mut GeometryGroup,
    inner: &[Point2<Real>; 3],
    count: usize,
    material: Material,
    layer: Real,
) {
    let chain = [inner[1], inner[0], inner[2]];
    let base_y = inner[1].y;
    let x_min = inner[1].x;
    let x_max = inner[2].x;
    for i in 1..=count {
        let t = i as Real / (count + 1) as Real;
        let x = x_min + t * (x_max - x_min);
        match y_at_x(&chain, x) {
            Some(y_top) => group.push_segment(
                Point2::new(x, base_y),
                Point2::new(x, y_top),
                material,
                layer,
            ),
            None => tracing::warn!("x={x:.2} not found on outline, skipping bar"),
        }
    }
}

/// Indicator lines wired between sash corners and edge midpoints. Swing
/// directions start on the opening side and converge toward the hinge;
/// directions without a bespoke wiring fall back to the upward pattern.
fn build_opening(
    group: &mut GeometryGroup,
    sash: &[Point2<Real>; 3],
    direction: OpeningDirection,
    style: &FrameStyle,
) {
    let dashed = Material::dashed(style.accent_color, FINE_DASH, FINE_DASH);
    let left_slant_center = lerp(sash[1], sash[0], 0.5);
    let right_slant_center = lerp(sash[0], sash[2], 0.5);
    let base_center = lerp(sash[1], sash[2], 0.5);

    let lines: Vec<(Point2<Real>, Point2<Real>)> = match direction {
        OpeningDirection::Fixed => return,
        OpeningDirection::Left => vec![
            (sash[1], right_slant_center),
            (left_slant_center, right_slant_center),
        ],
        OpeningDirection::Right => vec![
            (sash[2], left_slant_center),
            (right_slant_center, left_slant_center),
        ],
        OpeningDirection::Down => vec![(sash[1], sash[0]), (sash[2], sash[0])],
        OpeningDirection::Oscillating => vec![
            (sash[1], sash[0]),
            (sash[2], sash[0]),
            (sash[1], right_slant_center),
            (left_slant_center, right_slant_center),
        ],
        // Up, and every direction without a bespoke wiring.
        _ => vec![
            (left_slant_center, base_center),
            (right_slant_center, base_center),
        ],
    };
    for (start, end) in lines {
        group.push_segment(start, end, dashed, INDICATOR_LAYER);
    }
}

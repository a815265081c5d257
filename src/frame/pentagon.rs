//! Pentagon frame panels.
//!
//! A regular pentagon with the apex up, x-scaled to the requested aspect.
//! Vertex order: apex, upper-left, lower-left, lower-right, upper-right.

use super::{
    FINE_DASH, GLASS_LAYER, GLAZING_BAR_LAYER, INDICATOR_LAYER, SASH_LAYER, STRUCTURAL_BAR_LAYER,
    lerp, quad, region,
};
use crate::curve::{x_span_at_y, y_at_x};
use crate::float_types::{FRAC_PI_2, Real, TAU};
use crate::group::{GeometryGroup, Material};
use crate::params::{FrameParameters, OpeningDirection};
use crate::style::FrameStyle;
use nalgebra::Point2;

fn pentagon_vertices(width: Real, height: Real) -> [Point2<Real>; 5] {
    let r = height / 2.0;
    let aspect = width / height;
    core::array::from_fn(|i| {
        let angle = FRAC_PI_2 + i as Real * TAU / 5.0;
        Point2::new(r * angle.cos() * aspect, r * angle.sin())
    })
}

impl GeometryGroup {
    /// Builds a pentagon frame: five side quads between the outer vertices
    /// and the shrunk inner pentagon, a sash ring when openable, the glazing
    /// pane, corner-wired indicator, and bars anchored on the vertex chains.
    pub fn pentagon_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let frame = Material::fill(style.frame_color);

        let outer = pentagon_vertices(w, h);
        let inner = pentagon_vertices(w - 2.0 * t, h - 2.0 * t);

        for i in 0..5 {
            let next = (i + 1) % 5;
            group.push_region(quad(outer[i], outer[next], inner[next], inner[i]), frame, 0.0);
        }

        let openable = !params.opening.is_fixed();
        let sash_inner = pentagon_vertices(w - 2.0 * t - 2.0 * gap, h - 2.0 * t - 2.0 * gap);
        if openable {
            let sash_outer = pentagon_vertices(w - 2.0 * gap, h - 2.0 * gap);
            for i in 0..5 {
                let next = (i + 1) % 5;
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

/// Horizontal bars across the closed pentagon ring; heights subdivide the
/// vertical extent of the glass, endpoints interpolate the bracketing edges.
fn push_horizontal_bars(
    group: &mut GeometryGroup,
    inner: &[Point2<Real>; 5],
    count: usize,
    default_half_width: Real,
    material: Material,
    layer: Real,
) {
    let mut ring: Vec<Point2<Real>> = inner.to_vec();
    ring.push(inner[0]);
    let y_min = inner[2].y;
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

/// Vertical bars between the lower and upper vertex chains, both monotonic
/// in x. Bars outside either chain's reach are skipped with a warning.
fn push_vertical_bars(
    group: &mut GeometryGroup,
    inner: &[Point2<Real>; 5],
    count: usize,
    material: Material,
    layer: Real,
) {
    let upper = [inner[1], inner[0], inner[4]];
    let lower = [inner[1], inner[2], inner[3], inner[4]];
    let x_min = inner[1].x;
    let x_max = inner[4].x;
    for i in 1..=count {
        let t = i as Real / (count + 1) as Real;
        let x = x_min + t * (x_max - x_min);
        match (y_at_x(&lower, x), y_at_x(&upper, x)) {
            (Some(y_bottom), Some(y_top)) => group.push_segment(
                Point2::new(x, y_bottom),
                Point2::new(x, y_top),
                material,
                layer,
            ),
            _ => tracing::warn!("x={x:.2} not found on outline, skipping bar"),
        }
    }
}

/// Indicator lines wired between sash vertices and edge midpoints, one
/// fixed wiring per direction; directions without a bespoke wiring fall
/// back to the upward pattern.
fn build_opening(
    group: &mut GeometryGroup,
    sash: &[Point2<Real>; 5],
    direction: OpeningDirection,
    style: &FrameStyle,
) {
    let dashed = Material::dashed(style.accent_color, FINE_DASH, FINE_DASH);
    let right_top_center = lerp(sash[4], sash[0], 0.5);
    let left_top_center = lerp(sash[1], sash[0], 0.5);
    let bottom_center = lerp(sash[3], sash[2], 0.5);
    let right_bottom_center = lerp(sash[3], sash[4], 0.5);

    let lines: Vec<(Point2<Real>, Point2<Real>)> = match direction {
        OpeningDirection::Fixed => return,
        OpeningDirection::Left => {
            let left_bottom_center = lerp(sash[1], sash[2], 0.5);
            vec![
                (right_top_center, left_bottom_center),
                (sash[3], left_bottom_center),
            ]
        },
        OpeningDirection::Right => vec![
            (left_top_center, right_bottom_center),
            (sash[2], right_bottom_center),
        ],
        OpeningDirection::Down => vec![(sash[2], sash[0]), (sash[0], sash[3])],
        OpeningDirection::Oscillating => vec![
            (sash[2], sash[0]),
            (sash[0], sash[3]),
            (left_top_center, right_bottom_center),
            (sash[2], right_bottom_center),
        ],
        // Up, and every direction without a bespoke wiring.
        _ => vec![
            (left_top_center, bottom_center),
            (bottom_center, right_top_center),
        ],
    };
    for (start, end) in lines {
        group.push_segment(start, end, dashed, INDICATOR_LAYER);
    }
}

//! Trapezoid frame panels.
//!
//! Corner order throughout: bottom-left, bottom-right, top-right, top-left
//! (counterclockwise, as the corner offsetting requires).

use super::{
    FINE_DASH, GLASS_LAYER, GLAZING_BAR_LAYER, INDICATOR_LAYER, SASH_LAYER, STRUCTURAL_BAR_LAYER,
    lerp, quad,
};
use crate::float_types::Real;
use crate::group::{GeometryGroup, Material};
use crate::offset::offset_vertex;
use crate::params::{FrameParameters, OpeningDirection};
use crate::style::FrameStyle;
use nalgebra::Point2;

fn corners(bottom_width: Real, top_width: Real, height: Real) -> [Point2<Real>; 4] {
    let hb = bottom_width / 2.0;
    let ht = top_width / 2.0;
    let hh = height / 2.0;
    [
        Point2::new(-hb, -hh),
        Point2::new(hb, -hh),
        Point2::new(ht, hh),
        Point2::new(-ht, hh),
    ]
}

/// Offsets each corner independently along its averaged inward normal.
fn inset(c: &[Point2<Real>; 4], thickness: Real) -> [Point2<Real>; 4] {
    [
        offset_vertex(c[0], c[3], c[1], thickness),
        offset_vertex(c[1], c[0], c[2], thickness),
        offset_vertex(c[2], c[1], c[3], thickness),
        offset_vertex(c[3], c[2], c[0], thickness),
    ]
}

impl GeometryGroup {
    /// Builds a trapezoid frame: four side quads between the outer corners
    /// and their inward offsets, a sash ring when openable, the glazing
    /// pane, corner-wired indicator, and bars interpolated between the glass
    /// corners. The top width is `width * top_width_ratio`.
    pub fn trapezoid_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let top_w = w * params.top_width_ratio;
        let frame = Material::fill(style.frame_color);

        let outer = corners(w, top_w, h);
        let inner = inset(&outer, t);

        for i in 0..4 {
            let next = (i + 1) % 4;
            group.push_region(quad(outer[i], outer[next], inner[next], inner[i]), frame, 0.0);
        }

        // Sash ring: the gap-inset trapezoid with a half-thickness offset.
        let sash_outer = corners(w - 2.0 * gap, top_w - 2.0 * gap, h - 2.0 * gap);
        let sash_inner = inset(&sash_outer, t / 2.0);
        let openable = !params.opening.is_fixed();
        if openable {
            for i in 0..4 {
                let next = (i + 1) % 4;
                group.push_region(
                    quad(sash_outer[i], sash_outer[next], sash_inner[next], sash_inner[i]),
                    frame,
                    SASH_LAYER,
                );
            }
        }

        // Glazing pane.
        group.push_region(
            quad(inner[0], inner[1], inner[2], inner[3]),
            Material::fill(style.glass_color),
            GLASS_LAYER,
        );

        if openable {
            build_opening(&mut group, &sash_inner, params.opening, style);
        }

        // Bars interpolate between the glass corners.
        let accent = Material::line(style.accent_color);
        let solid = Material::line(style.frame_color);
        push_edge_bars(&mut group, &inner, params.horizontal_glazing_bars, true, accent, GLAZING_BAR_LAYER);
        push_edge_bars(&mut group, &inner, params.vertical_glazing_bars, false, accent, GLAZING_BAR_LAYER);
        push_edge_bars(&mut group, &inner, params.rails, true, solid, STRUCTURAL_BAR_LAYER);
        push_edge_bars(&mut group, &inner, params.stiles, false, solid, STRUCTURAL_BAR_LAYER);

        group
    }
}

/// Bars between opposite edges of a quad: horizontal bars interpolate the
/// left and right edges, vertical bars the bottom and top edges.
fn push_edge_bars(
    group: &mut GeometryGroup,
    c: &[Point2<Real>; 4],
    count: usize,
    horizontal: bool,
    material: Material,
    layer: Real,
) {
    for i in 1..=count {
        let t = i as Real / (count + 1) as Real;
        let (start, end) = if horizontal {
            (lerp(c[0], c[3], t), lerp(c[1], c[2], t))
        } else {
            (lerp(c[0], c[1], t), lerp(c[3], c[2], t))
        };
        group.push_segment(start, end, material, layer);
    }
}

/// Indicator lines wired between sash corners and edge midpoints, one fixed
/// wiring per direction. Directions without a bespoke wiring fall back to
/// the upward pattern.
fn build_opening(
    group: &mut GeometryGroup,
    sash: &[Point2<Real>; 4],
    direction: OpeningDirection,
    style: &FrameStyle,
) {
    let dashed = Material::dashed(style.accent_color, FINE_DASH, FINE_DASH);
    let left_center = lerp(sash[0], sash[3], 0.5);
    let right_center = lerp(sash[1], sash[2], 0.5);
    let top_center = lerp(sash[2], sash[3], 0.5);
    let bottom_center = lerp(sash[0], sash[1], 0.5);

    let lines: Vec<(Point2<Real>, Point2<Real>)> = match direction {
        OpeningDirection::Fixed => return,
        OpeningDirection::Left => vec![(sash[0], right_center), (sash[3], right_center)],
        OpeningDirection::Right => vec![(sash[1], left_center), (sash[2], left_center)],
        OpeningDirection::Down => vec![(bottom_center, sash[2]), (bottom_center, sash[3])],
        OpeningDirection::Oscillating => vec![
            (top_center, sash[0]),
            (top_center, sash[1]),
            (right_center, sash[0]),
            (right_center, sash[3]),
        ],
        // Up, and every direction without a bespoke wiring.
        _ => vec![(top_center, sash[0]), (top_center, sash[1])],
    };
    for (start, end) in lines {
        group.push_segment(start, end, dashed, INDICATOR_LAYER);
    }
}

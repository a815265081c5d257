//! Segment-top arch frame panels.
//!
//! A shallow arch cut from an ellipse over the fixed angular range
//! [π/3, 2π/3], sitting on a flat base at `-height/2`.

use super::{
    COARSE_DASH, CURVED_GLAZING_BAR_LAYER, GLASS_LAYER, INDICATOR_LAYER, SASH_LAYER,
    STRUCTURAL_BAR_LAYER, centered_rect, push_horizontal_curve_bars, push_vertical_curve_bars,
    raised, region,
};
use crate::curve::{CURVE_SEGMENTS, sample_ellipse_arc};
use crate::float_types::{PI, Real};
use crate::group::{GeometryGroup, Material};
use crate::params::FrameParameters;
use crate::style::FrameStyle;
use nalgebra::Point2;

const START_ANGLE: Real = PI / 3.0;
const END_ANGLE: Real = PI - START_ANGLE;

/// Arch silhouette closed down to the base line.
fn arch_region(rx: Real, ry: Real, base_y: Real) -> Vec<Point2<Real>> {
    let mut points = raised(
        sample_ellipse_arc(rx, ry, START_ANGLE, END_ANGLE, CURVE_SEGMENTS),
        base_y,
    );
    points.push(Point2::new(rx * END_ANGLE.cos(), base_y));
    points.push(Point2::new(rx * START_ANGLE.cos(), base_y));
    points
}

impl GeometryGroup {
    /// Builds a segment-top arch frame: flat bottom strip, filled arch
    /// silhouette, stroked sash arc plus inner strips when openable, glazing
    /// pane, mid-angle indicator, and bars anchored on the sampled arch.
    pub fn segment_arch_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let base_y = -h / 2.0;
        let frame = Material::fill(style.frame_color);

        let outer_rx = w - t;
        let outer_ry = h;

        // Bottom strip.
        group.push_region(
            centered_rect(0.0, base_y + t / 2.0, w - 2.0 * t, t),
            frame,
            0.02,
        );

        // Filled arch silhouette; the glazing pane covers its interior.
        group.push_region(region(&arch_region(outer_rx, outer_ry, base_y)), frame, 0.0);

        let openable = !params.opening.is_fixed();
        if openable {
            let inner_rx = outer_rx - gap;
            let inner_ry = outer_ry - gap;
            let inner_start = START_ANGLE + t / 2.0;
            let inner_end = END_ANGLE - t / 2.0;
            let sash = raised(
                sample_ellipse_arc(inner_rx, inner_ry, inner_start, inner_end, CURVE_SEGMENTS),
                base_y,
            );

            // Side strips reach from the base up to the sash arc's endpoints.
            let strip_height = inner_ry * inner_start.sin() - gap;
            group.push_region(
                centered_rect(
                    -w / 2.0 + gap,
                    base_y + gap + strip_height / 2.0 + t / 2.0,
                    t,
                    strip_height,
                ),
                frame,
                0.02,
            );
            group.push_region(
                centered_rect(
                    w / 2.0 - gap,
                    base_y + gap + strip_height / 2.0 + t / 2.0,
                    t,
                    strip_height,
                ),
                frame,
                0.02,
            );
            group.push_region(
                centered_rect(0.0, base_y + t / 2.0 + gap, w - 2.0 * gap + t, t),
                frame,
                0.02,
            );
            group.push_curve(sash, t, Material::line(style.frame_color), SASH_LAYER);
        }

        // Glazing pane.
        group.push_region(
            region(&arch_region(outer_rx - t, outer_ry - t, base_y)),
            Material::fill(style.glass_color),
            GLASS_LAYER,
        );

        if openable {
            build_opening(&mut group, w / 2.0 - t - gap, h - t - gap, gap, base_y, style);
        }

        // Bars anchored on the sampled arch, thickness inset.
        let bar_pts = sample_ellipse_arc(w - t, h, START_ANGLE, END_ANGLE, CURVE_SEGMENTS);
        let usable_width = w - 2.0 * t;
        let solid = Material::line(style.frame_color);
        let accent = Material::line(style.accent_color);
        push_horizontal_curve_bars(
            &mut group,
            &bar_pts,
            params.rails,
            base_y,
            usable_width / 2.0,
            solid,
            STRUCTURAL_BAR_LAYER,
        );
        push_vertical_curve_bars(
            &mut group,
            &bar_pts,
            params.stiles,
            usable_width,
            base_y,
            solid,
            STRUCTURAL_BAR_LAYER,
        );
        push_horizontal_curve_bars(
            &mut group,
            &bar_pts,
            params.horizontal_glazing_bars,
            base_y,
            usable_width / 2.0,
            accent,
            CURVED_GLAZING_BAR_LAYER,
        );
        push_vertical_curve_bars(
            &mut group,
            &bar_pts,
            params.vertical_glazing_bars,
            usable_width,
            base_y,
            accent,
            CURVED_GLAZING_BAR_LAYER,
        );

        group
    }
}

/// Two dashed lines from the arch shoulders converging at the mid-angle;
/// the spread equals half the arch's angular range.
fn build_opening(
    group: &mut GeometryGroup,
    rx: Real,
    ry: Real,
    gap: Real,
    base_y: Real,
    style: &FrameStyle,
) {
    let dashed = Material::dashed(style.accent_color, COARSE_DASH, COARSE_DASH);
    let converge_angle = (START_ANGLE + END_ANGLE) / 2.0;
    let converge = Point2::new(
        rx * converge_angle.cos(),
        base_y + ry * converge_angle.sin(),
    );
    for angle in [START_ANGLE, END_ANGLE] {
        let start = Point2::new(rx * angle.cos(), base_y + gap);
        group.push_segment(start, converge, dashed, INDICATOR_LAYER);
    }
}

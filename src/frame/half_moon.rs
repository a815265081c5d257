//! Half-moon (semi-elliptical) frame panels.
//!
//! The local origin is the panel center; the flat base sits at `-height/2`.

use super::{
    COARSE_DASH, CURVED_GLAZING_BAR_LAYER, GLASS_LAYER, INDICATOR_LAYER, SASH_LAYER,
    STRUCTURAL_BAR_LAYER, centered_rect, push_horizontal_curve_bars, push_vertical_curve_bars,
    raised, region, ring_region,
};
use crate::curve::{CURVE_SEGMENTS, sample_ellipse_arc};
use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::group::{GeometryGroup, Material};
use crate::params::FrameParameters;
use crate::style::FrameStyle;
use nalgebra::Point2;

impl GeometryGroup {
    /// Builds a half-moon frame: flat bottom strip, half-elliptical ring,
    /// stroked sash curve when openable, glazing pane, apex indicator, and
    /// bars anchored on the sampled outline.
    pub fn half_moon_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let base_y = -h / 2.0;
        let frame = Material::fill(style.frame_color);

        let outer_rx = w / 2.0;
        let outer_ry = h - t;
        let inner_rx = outer_rx - gap;
        let inner_ry = outer_ry - gap;

        // Bottom strip.
        group.push_region(centered_rect(0.0, base_y, w - 2.0 * t, t), frame, 0.02);

        // Frame material between the outer boundary and the sash inset.
        let outer_pts = raised(
            sample_ellipse_arc(outer_rx, outer_ry, 0.0, PI, CURVE_SEGMENTS),
            base_y,
        );
        let hole_pts = raised(
            sample_ellipse_arc(inner_rx, inner_ry, 0.0, PI, CURVE_SEGMENTS),
            base_y,
        );
        group.push_region(ring_region(&outer_pts, &hole_pts), frame, 0.0);

        let openable = !params.opening.is_fixed();
        if openable {
            // Sash ring drawn as a stroked curve along the inset arc.
            group.push_curve(hole_pts, t, Material::line(style.frame_color), SASH_LAYER);
        }

        // Glazing pane.
        let glass_pts = raised(
            sample_ellipse_arc(outer_rx - t, outer_ry - t, 0.0, PI, CURVE_SEGMENTS),
            base_y,
        );
        group.push_region(region(&glass_pts), Material::fill(style.glass_color), GLASS_LAYER);

        if openable {
            build_opening(&mut group, w / 2.0 - t - gap, h - t - gap, base_y, style);
        }

        // Bars anchored on the sampled outline, thickness inset.
        let bar_pts = sample_ellipse_arc(w / 2.0 - t, h - t, 0.0, PI, CURVE_SEGMENTS);
        let usable_width = w - 2.0 * t;
        let solid = Material::line(style.frame_color);
        let accent = Material::line(style.accent_color);
        push_horizontal_curve_bars(
            &mut group,
            &bar_pts,
            params.rails,
            base_y,
            w / 2.0 - t,
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
            w / 2.0 - t,
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

/// Two dashed lines rising from the base and converging at the apex. The
/// half-moon always swings toward its curved edge, whatever the configured
/// direction.
fn build_opening(
    group: &mut GeometryGroup,
    rx: Real,
    ry: Real,
    base_y: Real,
    style: &FrameStyle,
) {
    let dashed = Material::dashed(style.accent_color, COARSE_DASH, COARSE_DASH);
    let spread = PI / 6.0;
    let converge = Point2::new(0.0, base_y + ry);
    for angle in [FRAC_PI_2 - spread, FRAC_PI_2 + spread] {
        let start = Point2::new(rx * angle.cos(), base_y);
        group.push_segment(start, converge, dashed, INDICATOR_LAYER);
    }
}

//! Basket-handle arch frame panels.
//!
//! A flattened arch: the top curve is an ellipse arc whose sine term is
//! raised to [`BASKET_HANDLE_EXPONENT`]. Sampled right-to-left over [π, 0]
//! so the sine stays non-negative.

use super::{
    COARSE_DASH, CURVED_GLAZING_BAR_LAYER, GLASS_LAYER, INDICATOR_LAYER, SASH_LAYER,
    STRUCTURAL_BAR_LAYER, centered_rect, push_horizontal_curve_bars, push_vertical_curve_bars,
    raised, region, ring_region,
};
use crate::curve::{BASKET_HANDLE_EXPONENT, CURVE_SEGMENTS, sample_arc};
use crate::float_types::{FRAC_PI_2, PI, Real};
use crate::group::{GeometryGroup, Material};
use crate::params::FrameParameters;
use crate::style::FrameStyle;
use nalgebra::Point2;

fn basket_handle_points(rx: Real, ry: Real) -> Vec<Point2<Real>> {
    sample_arc(rx, ry, PI, 0.0, CURVE_SEGMENTS, BASKET_HANDLE_EXPONENT)
}

impl GeometryGroup {
    /// Builds a basket-handle arch frame: flat bottom strip, arch ring,
    /// stroked sash curve when openable, glazing pane, apex indicator, and
    /// bars anchored on the sampled arch.
    pub fn basket_handle_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let base_y = -h / 2.0;
        let frame = Material::fill(style.frame_color);

        let outer_rx = w / 2.0;
        let outer_ry = h;
        let inner_rx = outer_rx - gap;
        let inner_ry = outer_ry - gap;

        // Bottom strip.
        group.push_region(centered_rect(0.0, base_y, w - 2.0 * t, t), frame, 0.02);

        // Frame material between the outer arch and the sash inset.
        let outer_pts = raised(basket_handle_points(outer_rx, outer_ry), base_y);
        let hole_pts = raised(basket_handle_points(inner_rx, inner_ry), base_y);
        group.push_region(ring_region(&outer_pts, &hole_pts), frame, 0.0);

        let openable = !params.opening.is_fixed();
        if openable {
            group.push_curve(hole_pts, t, Material::line(style.frame_color), SASH_LAYER);
        }

        // Glazing pane.
        let glass_pts = raised(basket_handle_points(outer_rx - t, outer_ry - t), base_y);
        group.push_region(region(&glass_pts), Material::fill(style.glass_color), GLASS_LAYER);

        if openable {
            build_opening(&mut group, w / 2.0 - t - gap, h - t - gap, base_y, style);
        }

        // Bars anchored on the sampled arch, thickness inset.
        let bar_pts = basket_handle_points(w / 2.0 - t, h - t);
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

/// Same apex glyph as the half-moon: the arch always swings toward its
/// curved edge.
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

//! Circular and elliptical frame panels.

use super::{
    COARSE_DASH, GLASS_LAYER, GLAZING_BAR_LAYER, INDICATOR_LAYER, SASH_LAYER,
    STRUCTURAL_BAR_LAYER, region, ring_region,
};
use crate::curve::{CURVE_SEGMENTS, sample_ellipse_arc};
use crate::float_types::{EPSILON, FRAC_PI_2, PI, Real, TAU};
use crate::group::{GeometryGroup, Material};
use crate::params::{FrameParameters, OpeningDirection};
use crate::style::FrameStyle;
use nalgebra::Point2;

impl GeometryGroup {
    /// Builds a circular (elliptical for unequal spans) frame: an outer
    /// annulus, a sash annulus when openable, the glazing pane, the angular
    /// opening indicator, and chord bars.
    pub fn circle_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let frame = Material::fill(style.frame_color);

        let outer_rx = w / 2.0 - t;
        let outer_ry = h / 2.0 - t;

        // Outer annulus, ring width = frame thickness.
        push_ring(&mut group, outer_rx, outer_ry, t, frame, 0.0);

        let openable = !params.opening.is_fixed();
        if openable {
            // Sash annulus inset by the interior gap.
            push_ring(&mut group, outer_rx - gap, outer_ry - gap, t, frame, SASH_LAYER);
        }

        // Glazing pane.
        let glass = sample_ellipse_arc(outer_rx - t, outer_ry - t, 0.0, TAU, CURVE_SEGMENTS);
        group.push_region(region(&glass), Material::fill(style.glass_color), GLASS_LAYER);

        if openable {
            build_opening(
                &mut group,
                w / 2.0 - t - gap,
                h / 2.0 - t - gap,
                params.opening,
                style,
            );
        }

        // Bars are chords through the center at evenly divided angles.
        let bar_rx = w / 2.0 - t - gap;
        let bar_ry = h / 2.0 - t - gap;
        let accent = Material::line(style.accent_color);
        let solid = Material::line(style.frame_color);
        push_chords(
            &mut group,
            bar_rx,
            bar_ry,
            params.horizontal_glazing_bars,
            0.0,
            accent,
            GLAZING_BAR_LAYER,
        );
        push_chords(
            &mut group,
            bar_rx,
            bar_ry,
            params.vertical_glazing_bars,
            FRAC_PI_2,
            accent,
            GLAZING_BAR_LAYER,
        );
        push_chords(&mut group, bar_rx, bar_ry, params.rails, 0.0, solid, STRUCTURAL_BAR_LAYER);
        push_chords(
            &mut group,
            bar_rx,
            bar_ry,
            params.stiles,
            FRAC_PI_2,
            solid,
            STRUCTURAL_BAR_LAYER,
        );

        group
    }
}

/// Elliptical annulus at the given radii; the hole shrinks both radii by the
/// factor that removes `thickness` from the x radius.
fn push_ring(
    group: &mut GeometryGroup,
    rx: Real,
    ry: Real,
    thickness: Real,
    material: Material,
    layer: Real,
) {
    let shrink = if rx.abs() < EPSILON { 0.0 } else { 1.0 - thickness / rx };
    let outer = sample_ellipse_arc(rx, ry, 0.0, TAU, CURVE_SEGMENTS);
    let hole = sample_ellipse_arc(rx * shrink, ry * shrink, 0.0, TAU, CURVE_SEGMENTS);
    group.push_region(ring_region(&outer, &hole), material, layer);
}

/// Chords through the center at angles `i/(count+1)·π + phase`.
fn push_chords(
    group: &mut GeometryGroup,
    rx: Real,
    ry: Real,
    count: usize,
    phase: Real,
    material: Material,
    layer: Real,
) {
    for i in 1..=count {
        let angle = i as Real / (count + 1) as Real * PI + phase;
        let tip = Point2::new(rx * angle.cos(), ry * angle.sin());
        group.push_segment(Point2::new(-tip.x, -tip.y), tip, material, layer);
    }
}

/// Two dashed lines starting on the sash ellipse opposite the hinge and
/// converging at the mapped angle: Up→3π/2, Down→π/2, Left→0, Right→π.
/// Oscillating combines the up and down patterns; directions without an
/// angular meaning fall back to the up pattern.
fn build_opening(
    group: &mut GeometryGroup,
    rx: Real,
    ry: Real,
    direction: OpeningDirection,
    style: &FrameStyle,
) {
    let dashed = Material::dashed(style.accent_color, COARSE_DASH, COARSE_DASH);
    match direction {
        OpeningDirection::Fixed => {},
        OpeningDirection::Up => push_converging(group, rx, ry, PI * 1.5, dashed),
        OpeningDirection::Down => push_converging(group, rx, ry, PI * 0.5, dashed),
        OpeningDirection::Left => push_converging(group, rx, ry, 0.0, dashed),
        OpeningDirection::Right => push_converging(group, rx, ry, PI, dashed),
        OpeningDirection::Oscillating => {
            push_converging(group, rx, ry, PI * 1.5, dashed);
            push_converging(group, rx, ry, PI * 0.5, dashed);
        },
        _ => push_converging(group, rx, ry, PI * 1.5, dashed),
    }
}

fn push_converging(
    group: &mut GeometryGroup,
    rx: Real,
    ry: Real,
    converge_angle: Real,
    material: Material,
) {
    let spread = PI / 6.0;
    let converge = Point2::new(rx * converge_angle.cos(), ry * converge_angle.sin());
    for angle in [converge_angle + PI - spread, converge_angle + PI + spread] {
        let start = Point2::new(rx * angle.cos(), ry * angle.sin());
        group.push_segment(start, converge, material, INDICATOR_LAYER);
    }
}

//! Rectangular frame panels.
//!
//! The rectangle is the only silhouette with bespoke glyphs for every
//! opening direction, including the composite solid+dashed glyphs for
//! rotating, tilting, sliding, pocket, and accordion sashes.

use super::{
    FINE_DASH, GLASS_LAYER, GLAZING_BAR_LAYER, INDICATOR_LAYER, SASH_LAYER, STRUCTURAL_BAR_LAYER,
    centered_rect,
};
use crate::float_types::Real;
use crate::group::{GeometryGroup, Material};
use crate::params::{FrameParameters, OpeningDirection};
use crate::style::FrameStyle;
use nalgebra::Point2;

impl GeometryGroup {
    /// Builds a rectangular frame: four frame strips, a sash ring when
    /// openable, the glazing pane, the opening indicator, and bars.
    pub fn rectangle_frame(params: &FrameParameters, style: &FrameStyle) -> Self {
        let mut group = GeometryGroup::new();
        let w = params.width;
        let h = params.height;
        let t = params.thickness;
        let gap = params.interior_gap;
        let frame = Material::fill(style.frame_color);

        // Outer frame: top, bottom, left, right strips.
        group.push_region(centered_rect(0.0, h / 2.0 - t / 2.0, w, t), frame, 0.0);
        group.push_region(centered_rect(0.0, -h / 2.0 + t / 2.0, w, t), frame, 0.0);
        group.push_region(centered_rect(-w / 2.0 + t / 2.0, 0.0, t, h), frame, 0.0);
        group.push_region(centered_rect(w / 2.0 - t / 2.0, 0.0, t, h), frame, 0.0);

        let openable = !params.opening.is_fixed();
        if openable {
            // Sash ring: four half-thickness strips inset by the interior gap.
            let sw = w - 2.0 * gap;
            let sh = h - 2.0 * gap;
            group.push_region(
                centered_rect(0.0, sh / 2.0 - t / 4.0, sw, t / 2.0),
                frame,
                SASH_LAYER,
            );
            group.push_region(
                centered_rect(0.0, -sh / 2.0 + t / 4.0, sw, t / 2.0),
                frame,
                SASH_LAYER,
            );
            group.push_region(
                centered_rect(-sw / 2.0 + t / 4.0, 0.0, t / 2.0, sh),
                frame,
                SASH_LAYER,
            );
            group.push_region(
                centered_rect(sw / 2.0 - t / 4.0, 0.0, t / 2.0, sh),
                frame,
                SASH_LAYER,
            );
        }

        // Glazing pane.
        group.push_region(
            centered_rect(0.0, 0.0, w - 2.0 * t, h - 2.0 * t),
            Material::fill(style.glass_color),
            GLASS_LAYER,
        );

        if openable {
            build_opening(&mut group, w - 2.0 * gap, h - 2.0 * gap, t, params.opening, style);
        }

        // Bars subdivide the glazing span: the sash interior when openable,
        // the pane itself when fixed.
        let (span_w, span_h) = if openable {
            (w - 2.0 * gap, h - 2.0 * gap)
        } else {
            (w - 2.0 * t, h - 2.0 * t)
        };
        let accent = Material::line(style.accent_color);
        let solid = Material::line(style.frame_color);

        for i in 1..=params.horizontal_glazing_bars {
            let y = -span_h / 2.0
                + i as Real * span_h / (params.horizontal_glazing_bars + 1) as Real;
            group.push_segment(
                Point2::new(-span_w / 2.0, y),
                Point2::new(span_w / 2.0, y),
                accent,
                GLAZING_BAR_LAYER,
            );
        }
        for i in 1..=params.vertical_glazing_bars {
            let x =
                -span_w / 2.0 + i as Real * span_w / (params.vertical_glazing_bars + 1) as Real;
            group.push_segment(
                Point2::new(x, -span_h / 2.0),
                Point2::new(x, span_h / 2.0),
                accent,
                GLAZING_BAR_LAYER,
            );
        }
        for i in 1..=params.rails {
            let y = -span_h / 2.0 + i as Real * span_h / (params.rails + 1) as Real;
            group.push_segment(
                Point2::new(-span_w / 2.0, y),
                Point2::new(span_w / 2.0, y),
                solid,
                STRUCTURAL_BAR_LAYER,
            );
        }
        for i in 1..=params.stiles {
            let x = -span_w / 2.0 + i as Real * span_w / (params.stiles + 1) as Real;
            group.push_segment(
                Point2::new(x, -span_h / 2.0),
                Point2::new(x, span_h / 2.0),
                solid,
                STRUCTURAL_BAR_LAYER,
            );
        }

        group
    }
}

/// Opening indicator glyphs in sash-local coordinates: `width`/`height` are
/// already reduced by twice the interior gap, line anchors are inset by the
/// frame thickness. Swing directions converge toward the hinge side.
fn build_opening(
    group: &mut GeometryGroup,
    width: Real,
    height: Real,
    t: Real,
    direction: OpeningDirection,
    style: &FrameStyle,
) {
    let hw = width / 2.0;
    let hh = height / 2.0;
    let dashed = Material::dashed(style.accent_color, FINE_DASH, FINE_DASH);
    let solid = Material::line(style.accent_color);
    let p = Point2::new;

    match direction {
        OpeningDirection::Fixed => {},
        OpeningDirection::Left => {
            group.push_segment(p(-hw + t, hh - t), p(hw, 0.0), dashed, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, -hh + t), p(hw, 0.0), dashed, INDICATOR_LAYER);
        },
        OpeningDirection::Right => {
            group.push_segment(p(hw - t, hh - t), p(-hw, 0.0), dashed, INDICATOR_LAYER);
            group.push_segment(p(hw - t, -hh + t), p(-hw, 0.0), dashed, INDICATOR_LAYER);
        },
        OpeningDirection::Up => {
            group.push_segment(p(-hw + t, hh - t), p(0.0, -hh + t), dashed, INDICATOR_LAYER);
            group.push_segment(p(hw - t, hh - t), p(0.0, -hh + t), dashed, INDICATOR_LAYER);
        },
        OpeningDirection::Down => {
            group.push_segment(p(-hw + t, -hh + t), p(0.0, hh - t), dashed, INDICATOR_LAYER);
            group.push_segment(p(hw - t, -hh + t), p(0.0, hh - t), dashed, INDICATOR_LAYER);
        },
        OpeningDirection::Oscillating => {
            // Tilt-turn: the down pattern plus the left pattern.
            group.push_segment(p(-hw + t, -hh + t), p(0.0, hh - t), dashed, INDICATOR_LAYER);
            group.push_segment(p(hw - t, -hh + t), p(0.0, hh - t), dashed, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, hh - t), p(hw, 0.0), dashed, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, -hh + t), p(hw, 0.0), dashed, INDICATOR_LAYER);
        },
        OpeningDirection::Rotating | OpeningDirection::Tilting => {
            // Dashed diamond through the edge midpoints, solid pivot edges.
            let top = p(0.0, hh - t);
            let right = p(hw - t, 0.0);
            let bottom = p(0.0, -hh + t);
            let left = p(-hw + t, 0.0);
            group.push_segment(top, right, dashed, INDICATOR_LAYER);
            group.push_segment(right, bottom, dashed, INDICATOR_LAYER);
            group.push_segment(bottom, left, dashed, INDICATOR_LAYER);
            group.push_segment(left, top, dashed, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, hh - t), p(hw - t, hh - t), solid, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, -hh + t), p(hw - t, -hh + t), solid, INDICATOR_LAYER);
        },
        OpeningDirection::Sliding | OpeningDirection::Pocket => {
            // Double-headed arrow along the slide axis.
            let head = 0.15 * hw.min(hh);
            group.push_segment(p(-hw + t, 0.0), p(hw - t, 0.0), solid, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, 0.0), p(-hw + t + head, head), dashed, INDICATOR_LAYER);
            group.push_segment(p(-hw + t, 0.0), p(-hw + t + head, -head), dashed, INDICATOR_LAYER);
            group.push_segment(p(hw - t, 0.0), p(hw - t - head, head), dashed, INDICATOR_LAYER);
            group.push_segment(p(hw - t, 0.0), p(hw - t - head, -head), dashed, INDICATOR_LAYER);
        },
        OpeningDirection::Accordion => {
            // Folding panels: dashed zigzag over a solid running edge.
            let folds = [
                p(-hw + t, -hh + t),
                p(-hw / 2.0, hh - t),
                p(0.0, -hh + t),
                p(hw / 2.0, hh - t),
                p(hw - t, -hh + t),
            ];
            for pair in folds.windows(2) {
                group.push_segment(pair[0], pair[1], dashed, INDICATOR_LAYER);
            }
            group.push_segment(folds[0], folds[4], solid, INDICATOR_LAYER);
        },
    }
}

mod support;

use fenestra::curve::{CURVE_SEGMENTS, sample_ellipse_arc, x_span_at_y};
use fenestra::float_types::{PI, Real};
use fenestra::frame::{GLAZING_BAR_LAYER, STRUCTURAL_BAR_LAYER};
use fenestra::style::GLASS_COLOR;
use fenestra::{
    Color, FrameParameters, FrameStyle, OpeningDirection, ShapeKind, compose_frame,
};

use crate::support::{approx_eq, dashed_segments, segments_at_layer};

fn style() -> FrameStyle {
    FrameStyle::default()
}

#[test]
fn fixed_rectangle_without_bars() {
    let params = FrameParameters::new(3.0, 3.0);
    let group = compose_frame(ShapeKind::Rectangle, &params, &style());

    let frame_regions = group
        .regions()
        .filter(|r| r.material.color() == Color::BLACK)
        .count();
    let glass_regions = group
        .regions()
        .filter(|r| r.material.color() == GLASS_COLOR)
        .count();
    assert_eq!(frame_regions, 4, "top/bottom/left/right strips");
    assert_eq!(glass_regions, 1);
    assert_eq!(group.segments().count(), 0, "no bars, no indicator");
    assert_eq!(group.curves().count(), 0);
}

#[test]
fn circle_left_indicator_converges_on_the_hinge_side() {
    let params = FrameParameters::new(2.0, 2.0)
        .with_thickness(0.05)
        .with_opening(OpeningDirection::Left);
    let group = compose_frame(ShapeKind::Circle, &params, &style());

    // Outer ring, sash ring, glazing pane.
    assert_eq!(group.regions().count(), 3);

    let dashed = dashed_segments(&group);
    assert_eq!(dashed.len(), 2);
    // Left maps to convergence angle 0: both lines end on the sash ellipse
    // at (r, 0).
    let r = 2.0 / 2.0 - 0.05 - params.interior_gap;
    for segment in dashed {
        assert!(approx_eq(segment.end.x, r, 1e-9));
        assert!(approx_eq(segment.end.y, 0.0, 1e-9));
    }
}

#[test]
fn circle_right_indicator_converges_at_angle_pi() {
    let params = FrameParameters::new(2.0, 2.0)
        .with_thickness(0.05)
        .with_opening(OpeningDirection::Right);
    let group = compose_frame(ShapeKind::Circle, &params, &style());

    let r = 2.0 / 2.0 - 0.05 - params.interior_gap;
    let dashed = dashed_segments(&group);
    assert_eq!(dashed.len(), 2);
    for segment in dashed {
        assert!(approx_eq(segment.end.x, -r, 1e-9));
        assert!(approx_eq(segment.end.y, 0.0, 1e-9));
    }
}

#[test]
fn fixed_frames_have_no_dashed_primitives() {
    for shape in ShapeKind::ALL {
        let params = FrameParameters::new(3.0, 3.0);
        let group = compose_frame(shape, &params, &style());
        assert_eq!(dashed_segments(&group).len(), 0, "{shape:?}");
    }
}

#[test]
fn every_openable_combination_shows_an_indicator() {
    for shape in ShapeKind::ALL {
        for direction in OpeningDirection::ALL {
            if direction.is_fixed() {
                continue;
            }
            let params = FrameParameters::new(3.0, 3.0).with_opening(direction);
            let group = compose_frame(shape, &params, &style());
            assert!(
                !dashed_segments(&group).is_empty(),
                "{shape:?} x {direction:?}"
            );
        }
    }
}

#[test]
fn oscillating_combines_two_patterns() {
    let params = FrameParameters::new(3.0, 2.0).with_opening(OpeningDirection::Oscillating);
    for shape in [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Trapezoid] {
        let group = compose_frame(shape, &params, &style());
        assert_eq!(dashed_segments(&group).len(), 4, "{shape:?}");
    }
}

#[test]
fn rectangle_bars_evenly_subdivide_the_sash_span() {
    let params = FrameParameters::new(3.0, 2.0)
        .with_opening(OpeningDirection::Left)
        .with_glazing_bars(3, 2);
    let group = compose_frame(ShapeKind::Rectangle, &params, &style());

    let bars = segments_at_layer(&group, GLAZING_BAR_LAYER);
    assert_eq!(bars.len(), 5);

    let span_h = 2.0 - 2.0 * params.interior_gap;
    let spacing = span_h / 4.0;
    let mut ys: Vec<Real> = bars
        .iter()
        .filter(|s| approx_eq(s.start.y, s.end.y, 1e-12))
        .map(|s| s.start.y)
        .collect();
    assert_eq!(ys.len(), 3);
    ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for (i, y) in ys.iter().enumerate() {
        let expected = -span_h / 2.0 + (i + 1) as Real * spacing;
        assert!(approx_eq(*y, expected, 1e-9), "bar {i} at {y}, expected {expected}");
    }
}

#[test]
fn fixed_rectangle_bars_subdivide_the_glass_span() {
    let params = FrameParameters::new(3.0, 2.0).with_glazing_bars(0, 1);
    let group = compose_frame(ShapeKind::Rectangle, &params, &style());
    let bars = segments_at_layer(&group, GLAZING_BAR_LAYER);
    assert_eq!(bars.len(), 1);
    // A single vertical bar bisects the pane.
    assert!(approx_eq(bars[0].start.x, 0.0, 1e-9));
    assert!(approx_eq(bars[0].end.x, 0.0, 1e-9));
}

#[test]
fn triangle_stiles_terminate_on_the_slanted_edges() {
    let params = FrameParameters::new(2.0, 2.0).with_structural_bars(2, 0);
    let group = compose_frame(ShapeKind::Triangle, &params, &style());

    let stiles = segments_at_layer(&group, STRUCTURAL_BAR_LAYER);
    assert_eq!(stiles.len(), 2);

    let hw = (2.0 - 2.0 * params.thickness) / 2.0;
    let hh = hw;
    for segment in stiles {
        assert!(approx_eq(segment.start.x, segment.end.x, 1e-12));
        assert!(approx_eq(segment.start.y, -hh, 1e-9));
        // The top endpoint interpolates linearly between the base corner and
        // the apex of the inner triangle.
        let x = segment.start.x;
        let expected_top = if x < 0.0 {
            let ratio = (x + hw) / hw;
            -hh + ratio * 2.0 * hh
        } else {
            let ratio = x / hw;
            hh - ratio * 2.0 * hh
        };
        assert!(approx_eq(segment.end.y, expected_top, 1e-9));
    }
}

#[test]
fn segment_arch_rails_anchor_on_the_sampled_arch() {
    let params = FrameParameters::new(3.0, 1.5).with_structural_bars(0, 3);
    let group = compose_frame(ShapeKind::SegmentTopArch, &params, &style());

    let rails = segments_at_layer(&group, STRUCTURAL_BAR_LAYER);
    assert_eq!(rails.len(), 3);

    let t = params.thickness;
    let points = sample_ellipse_arc(3.0 - t, 1.5, PI / 3.0, PI - PI / 3.0, CURVE_SEGMENTS);
    let usable_half = (3.0 - 2.0 * t) / 2.0;
    let y_max = points.iter().fold(0.0, |acc: Real, p| acc.max(p.y));
    let base_y = -1.5 / 2.0;

    let mut rails = rails;
    rails.sort_by(|a, b| a.start.y.partial_cmp(&b.start.y).unwrap());
    for (i, rail) in rails.iter().enumerate() {
        let y_local = (i + 1) as Real / 4.0 * y_max;
        let (x_left, x_right) = x_span_at_y(&points, y_local, usable_half);
        assert!(approx_eq(rail.start.y, base_y + y_local, 1e-9));
        assert!(approx_eq(rail.end.y, base_y + y_local, 1e-9));
        assert!(approx_eq(rail.start.x, x_left, 1e-9));
        assert!(approx_eq(rail.end.x, x_right, 1e-9));
    }
}

#[test]
fn half_moon_indicator_converges_at_the_apex() {
    let params = FrameParameters::new(3.0, 1.5).with_opening(OpeningDirection::Up);
    let group = compose_frame(ShapeKind::HalfMoon, &params, &style());

    let dashed = dashed_segments(&group);
    assert_eq!(dashed.len(), 2);
    let apex_y = -1.5 / 2.0 + (1.5 - params.thickness - params.interior_gap);
    for segment in &dashed {
        assert!(approx_eq(segment.end.x, 0.0, 1e-9));
        assert!(approx_eq(segment.end.y, apex_y, 1e-9));
    }
}

#[test]
fn basket_handle_sash_is_a_stroked_curve() {
    let openable = FrameParameters::new(3.0, 1.5).with_opening(OpeningDirection::Up);
    let group = compose_frame(ShapeKind::BasketHandleArch, &openable, &style());
    let curves: Vec<_> = group.curves().collect();
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].points.len(), CURVE_SEGMENTS + 1);
    assert!(approx_eq(curves[0].width, openable.thickness, 1e-12));

    let fixed = FrameParameters::new(3.0, 1.5);
    let group = compose_frame(ShapeKind::BasketHandleArch, &fixed, &style());
    assert_eq!(group.curves().count(), 0);
}

#[test]
fn every_shape_produces_geometry() {
    for shape in ShapeKind::ALL {
        let params = FrameParameters::new(3.0, 2.0)
            .with_opening(OpeningDirection::Left)
            .with_glazing_bars(1, 1)
            .with_structural_bars(1, 1);
        let group = compose_frame(shape, &params, &style());
        assert!(!group.is_empty(), "{shape:?}");
    }
}

#[test]
fn degenerate_parameters_still_render() {
    // Builders never fail: absurd inputs degrade visually, not fatally.
    let params = FrameParameters::new(0.0, -1.0).with_opening(OpeningDirection::Left);
    for shape in ShapeKind::ALL {
        let _ = compose_frame(shape, &params, &style());
    }
}

#[test]
fn style_context_flows_into_the_materials() {
    let custom = FrameStyle {
        frame_color: Color(0x112233),
        glass_color: Color(0x445566),
        accent_color: Color(0x778899),
    };
    let params = FrameParameters::new(3.0, 2.0)
        .with_opening(OpeningDirection::Left)
        .with_glazing_bars(1, 0);
    let group = compose_frame(ShapeKind::Rectangle, &params, &custom);

    assert!(group.regions().any(|r| r.material.color() == Color(0x112233)));
    assert!(group.regions().any(|r| r.material.color() == Color(0x445566)));
    assert!(
        group
            .segments()
            .all(|s| s.material.color() == Color(0x778899))
    );
}

mod support;

use fenestra::{FrameConfig, OpeningDirection, ShapeKind, WindowConfig, assemble_window};

use crate::support::approx_eq;

#[test]
fn single_frame_layout_is_centered() {
    let layout = assemble_window(&WindowConfig::default());
    assert_eq!(layout.frames.len(), 1);
    let bounds = layout.bounds().expect("layout has geometry");
    assert!(approx_eq(bounds.center().x, 0.0, 1e-9));
    assert!(approx_eq(bounds.center().y, 0.0, 1e-9));
}

#[test]
fn bottom_frames_overlap_by_one_thickness() {
    let config = WindowConfig {
        bottom_frames: vec![
            FrameConfig::new(ShapeKind::Rectangle, 2.0, 2.5),
            FrameConfig::new(ShapeKind::Rectangle, 3.0, 2.5),
        ],
        ..WindowConfig::default()
    };
    let layout = assemble_window(&config);
    assert_eq!(layout.frames.len(), 2);

    let dx = layout.frames[1].position.x - layout.frames[0].position.x;
    // Center distance: half of each width, minus the shared thickness.
    assert!(approx_eq(dx, 2.0 / 2.0 + 3.0 / 2.0 - config.thickness, 1e-9));
    assert!(approx_eq(
        layout.frames[0].position.y,
        layout.frames[1].position.y,
        1e-9
    ));
}

#[test]
fn leading_triangle_is_mirrored_next_to_a_rectangle() {
    let config = WindowConfig {
        bottom_frames: vec![
            FrameConfig::new(ShapeKind::Triangle, 1.5, 2.5),
            FrameConfig::new(ShapeKind::Rectangle, 2.5, 2.5),
        ],
        ..WindowConfig::default()
    };
    let layout = assemble_window(&config);
    assert!(approx_eq(layout.frames[0].scale.x, -1.0, 1e-12));
    assert!(approx_eq(layout.frames[1].scale.x, 1.0, 1e-12));

    // A lone triangle keeps its orientation.
    let alone = WindowConfig {
        bottom_frames: vec![FrameConfig::new(ShapeKind::Triangle, 1.5, 2.5)],
        ..WindowConfig::default()
    };
    let layout = assemble_window(&alone);
    assert!(approx_eq(layout.frames[0].scale.x, 1.0, 1e-12));
}

#[test]
fn top_frame_sits_above_the_bottom_row() {
    let mut top = FrameConfig::new(ShapeKind::SegmentTopArch, 0.0, 1.5);
    top.opening = OpeningDirection::Fixed;
    let config = WindowConfig {
        bottom_frames: vec![
            FrameConfig::new(ShapeKind::Rectangle, 2.0, 3.0),
            FrameConfig::new(ShapeKind::Rectangle, 2.0, 3.0),
        ],
        top_frame: Some(top),
        ..WindowConfig::default()
    };
    let layout = assemble_window(&config);
    assert_eq!(layout.frames.len(), 3);

    let top_frame = &layout.frames[2];
    let bottom_y = layout.frames[0].position.y;
    // Vertical offset: half the bottom row plus half the top frame, less the
    // shared thickness.
    let expected = 3.0 / 2.0 + 1.5 / 2.0 - config.thickness / 2.0;
    assert!(approx_eq(top_frame.position.y - bottom_y, expected, 1e-9));
}

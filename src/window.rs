//! Window assembler: arranges one or more bottom frames plus an optional
//! top frame into a full window layout.
//!
//! The assembler consumes frame-composer output only: it positions, mirrors,
//! and centers whole groups, never reaching into their primitives.

use crate::float_types::Real;
use crate::frame::compose_frame;
use crate::group::{Bounds, GeometryGroup};
use crate::params::{FrameConfig, ShapeKind};
use crate::style::{BOTTOM_FRAME_HEIGHT, FRAME_THICKNESS, FrameStyle, INTERIOR_GAP, WINDOW_WIDTH};
use nalgebra::Vector2;

/// Window-level configuration: the shared thickness/gap, one
/// [`FrameConfig`] per bottom panel, and an optional top panel.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub thickness: Real,
    pub interior_gap: Real,
    pub bottom_frames: Vec<FrameConfig>,
    pub top_frame: Option<FrameConfig>,
    pub style: FrameStyle,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            thickness: FRAME_THICKNESS,
            interior_gap: INTERIOR_GAP,
            bottom_frames: vec![FrameConfig::new(
                ShapeKind::Rectangle,
                WINDOW_WIDTH,
                BOTTOM_FRAME_HEIGHT,
            )],
            top_frame: None,
            style: FrameStyle::default(),
        }
    }
}

/// Assembled window: positioned frame groups, centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowLayout {
    pub frames: Vec<GeometryGroup>,
}

impl WindowLayout {
    pub fn bounds(&self) -> Option<Bounds> {
        merged_bounds(&self.frames)
    }
}

fn merged_bounds(frames: &[GeometryGroup]) -> Option<Bounds> {
    let mut acc: Option<Bounds> = None;
    for frame in frames {
        if let Some(bounds) = frame.bounds() {
            match &mut acc {
                Some(merged) => merged.merge(&bounds),
                None => acc = Some(bounds),
            }
        }
    }
    acc
}

/// Builds and arranges every configured frame. Bottom frames run left to
/// right, overlapping by one frame thickness; the optional top frame spans
/// the full bottom row; the finished layout is recentered on the origin.
pub fn assemble_window(config: &WindowConfig) -> WindowLayout {
    let t = config.thickness;
    let max_bottom_height = config
        .bottom_frames
        .iter()
        .map(|c| c.height)
        .fold(0.0, Real::max);
    let total = total_bottom_width(config);

    let mut frames = Vec::new();
    let mut current_x = -total / 2.0;
    for (i, cfg) in config.bottom_frames.iter().enumerate() {
        let mut frame = compose_frame(
            cfg.shape,
            &cfg.to_parameters(t, config.interior_gap),
            &config.style,
        );
        // A leading triangle/trapezoid panel next to a rectangle panel is
        // mirrored so its slanted edge faces outward.
        if i == 0
            && config.bottom_frames.len() > 1
            && matches!(cfg.shape, ShapeKind::Triangle | ShapeKind::Trapezoid)
            && config.bottom_frames[1].shape == ShapeKind::Rectangle
        {
            frame.mirror_x();
        }
        frame.position = Vector2::new(current_x + cfg.width / 2.0, max_bottom_height / 2.0);
        current_x += cfg.width - t;
        frames.push(frame);
    }

    if let Some(top) = &config.top_frame {
        let bottom_center_x = merged_bounds(&frames).map_or(0.0, |b| b.center().x);
        let mut params = top.to_parameters(t, config.interior_gap);
        params.width = total - 2.0 * t;
        let mut frame = compose_frame(top.shape, &params, &config.style);
        frame.position = Vector2::new(
            bottom_center_x,
            max_bottom_height + top.height / 2.0 - t / 2.0,
        );
        frames.push(frame);
    }

    let mut layout = WindowLayout { frames };
    if let Some(bounds) = layout.bounds() {
        let center = bounds.center();
        for frame in &mut layout.frames {
            frame.position -= Vector2::new(center.x, center.y);
        }
    }
    layout
}

fn total_bottom_width(config: &WindowConfig) -> Real {
    let widths: Real = config.bottom_frames.iter().map(|c| c.width).sum();
    widths + config.bottom_frames.len().saturating_sub(1) as Real * config.thickness
}

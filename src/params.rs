//! Parameter set shared by every shape builder, plus the per-panel input
//! contract of the window assembler.

use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::style::{FRAME_THICKNESS, INTERIOR_GAP};

/// How a sash swings, slides, or folds. `Fixed` panels have no sash at all:
/// no inner ring and no opening indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningDirection {
    Fixed,
    Left,
    Right,
    Up,
    Down,
    Oscillating,
    Rotating,
    Tilting,
    Sliding,
    Pocket,
    Accordion,
}

impl OpeningDirection {
    pub const ALL: [OpeningDirection; 11] = [
        OpeningDirection::Fixed,
        OpeningDirection::Left,
        OpeningDirection::Right,
        OpeningDirection::Up,
        OpeningDirection::Down,
        OpeningDirection::Oscillating,
        OpeningDirection::Rotating,
        OpeningDirection::Tilting,
        OpeningDirection::Sliding,
        OpeningDirection::Pocket,
        OpeningDirection::Accordion,
    ];

    pub const fn is_fixed(self) -> bool {
        matches!(self, OpeningDirection::Fixed)
    }
}

/// Frame silhouette; selects which shape builder executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    HalfMoon,
    Trapezoid,
    Pentagon,
    Triangle,
    BasketHandleArch,
    SegmentTopArch,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::HalfMoon,
        ShapeKind::Trapezoid,
        ShapeKind::Pentagon,
        ShapeKind::Triangle,
        ShapeKind::BasketHandleArch,
        ShapeKind::SegmentTopArch,
    ];
}

/// Full parameter set of one frame panel.
///
/// All linear dimensions are expected to be positive, with `thickness` and
/// `interior_gap` below half the smallest span; [`FrameParameters::validate`]
/// reports violations, but builders accept any values and degrade gracefully.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameParameters {
    pub width: Real,
    pub height: Real,
    /// Height of the straight lower section on asymmetric silhouettes.
    /// Carried through the input contract; no shipped silhouette consumes it.
    pub low_height: Option<Real>,
    /// Top width as a fraction of the bottom width (trapezoid only).
    pub top_width_ratio: Real,
    pub thickness: Real,
    pub interior_gap: Real,
    pub opening: OpeningDirection,
    pub horizontal_glazing_bars: usize,
    pub vertical_glazing_bars: usize,
    pub stiles: usize,
    pub rails: usize,
}

impl FrameParameters {
    pub fn new(width: Real, height: Real) -> Self {
        Self {
            width,
            height,
            low_height: None,
            top_width_ratio: 0.6,
            thickness: FRAME_THICKNESS,
            interior_gap: INTERIOR_GAP,
            opening: OpeningDirection::Fixed,
            horizontal_glazing_bars: 0,
            vertical_glazing_bars: 0,
            stiles: 0,
            rails: 0,
        }
    }

    pub fn with_opening(mut self, opening: OpeningDirection) -> Self {
        self.opening = opening;
        self
    }

    pub fn with_thickness(mut self, thickness: Real) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_interior_gap(mut self, interior_gap: Real) -> Self {
        self.interior_gap = interior_gap;
        self
    }

    pub fn with_glazing_bars(mut self, horizontal: usize, vertical: usize) -> Self {
        self.horizontal_glazing_bars = horizontal;
        self.vertical_glazing_bars = vertical;
        self
    }

    pub fn with_structural_bars(mut self, stiles: usize, rails: usize) -> Self {
        self.stiles = stiles;
        self.rails = rails;
        self
    }

    pub fn with_top_width_ratio(mut self, top_width_ratio: Real) -> Self {
        self.top_width_ratio = top_width_ratio;
        self
    }

    /// Checks the well-formedness invariants. Advisory: builders do not call
    /// this, the composer logs the first violation and proceeds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
            ("interior_gap", self.interior_gap),
            ("top_width_ratio", self.top_width_ratio),
        ];
        for (name, value) in dimensions {
            if value <= 0.0 {
                return Err(ValidationError::NonPositiveDimension { name, value });
            }
        }
        let limit = self.width.min(self.height) / 2.0;
        if self.thickness >= limit {
            return Err(ValidationError::ThicknessTooLarge {
                thickness: self.thickness,
                limit,
            });
        }
        if self.interior_gap >= limit {
            return Err(ValidationError::GapTooLarge {
                gap: self.interior_gap,
                limit,
            });
        }
        Ok(())
    }
}

impl Default for FrameParameters {
    fn default() -> Self {
        Self::new(crate::style::WINDOW_WIDTH, crate::style::BOTTOM_FRAME_HEIGHT)
    }
}

/// Per-panel input contract of the window assembler: one `FrameConfig` per
/// physical frame panel in a multi-panel window. Thickness and interior gap
/// are window-level values supplied by the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameConfig {
    pub width: Real,
    pub height: Real,
    pub low_height: Option<Real>,
    pub shape: ShapeKind,
    pub opening: OpeningDirection,
    pub horizontal_glazing_bars: usize,
    pub vertical_glazing_bars: usize,
    pub stiles: usize,
    pub rails: usize,
}

impl FrameConfig {
    pub fn new(shape: ShapeKind, width: Real, height: Real) -> Self {
        Self {
            width,
            height,
            low_height: None,
            shape,
            opening: OpeningDirection::Fixed,
            horizontal_glazing_bars: 0,
            vertical_glazing_bars: 0,
            stiles: 0,
            rails: 0,
        }
    }

    pub fn to_parameters(&self, thickness: Real, interior_gap: Real) -> FrameParameters {
        FrameParameters {
            width: self.width,
            height: self.height,
            low_height: self.low_height,
            thickness,
            interior_gap,
            opening: self.opening,
            horizontal_glazing_bars: self.horizontal_glazing_bars,
            vertical_glazing_bars: self.vertical_glazing_bars,
            stiles: self.stiles,
            rails: self.rails,
            ..FrameParameters::new(self.width, self.height)
        }
    }
}

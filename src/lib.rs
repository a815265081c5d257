//! Parametric **window-frame geometry** for interactive configurators.
//!
//! Given window dimensions and style parameters, the crate computes the
//! outline, glazing pane, opening-direction indicator, and bar layout for a
//! family of frame silhouettes (rectangle, circle, half-moon, basket-handle
//! arch, segment-top arch, trapezoid, pentagon, triangle). The output is a
//! [`GeometryGroup`] of drawable primitives (filled regions, line segments,
//! and point-sampled curves) that an external renderer rasterizes; the crate
//! itself never touches pixels, cameras, or viewports.
//!
//! Every build is a full, independent regeneration: builders are pure, hold no
//! shared mutable state, and always return a renderable (possibly visually
//! degenerate) result rather than fail. Degenerate parameter combinations are
//! reported through `tracing` diagnostics and recovered with boundary
//! defaults.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod curve;
pub mod errors;
pub mod float_types;
pub mod frame;
pub mod group;
pub mod offset;
pub mod params;
pub mod style;
pub mod window;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use frame::compose_frame;
pub use group::{Bounds, FilledRegion, GeometryGroup, LineSegment, Material, Primitive, SampledCurve};
pub use params::{FrameConfig, FrameParameters, OpeningDirection, ShapeKind};
pub use style::{Color, FrameStyle};
pub use window::{WindowConfig, WindowLayout, assemble_window};

//! Validation errors
//!
//! Builders never fail; a visual configurator must keep rendering at absurd
//! parameter combinations. These errors are advisory: [`crate::FrameParameters::validate`]
//! reports them and the composer logs them before continuing best-effort.

use crate::float_types::Real;

/// Parameter combinations the builders accept but cannot render faithfully.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositiveDimension) A linear dimension is zero or negative
    #[error("(NonPositiveDimension) {name} must be > 0, got {value}")]
    NonPositiveDimension { name: &'static str, value: Real },
    /// (ThicknessTooLarge) The frame material would overlap itself
    #[error("(ThicknessTooLarge) frame thickness {thickness} exceeds half the smallest span ({limit})")]
    ThicknessTooLarge { thickness: Real, limit: Real },
    /// (GapTooLarge) The sash inset would collapse the interior
    #[error("(GapTooLarge) interior gap {gap} exceeds half the smallest span ({limit})")]
    GapTooLarge { gap: Real, limit: Real },
}

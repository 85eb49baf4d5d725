//! Reference design frames
//!
//! The fixed baseline screen a design was authored against. All design-time
//! sizes are expressed relative to one of these frames; the scaling engine
//! maps them onto the actual viewport.

use thiserror_no_std::Error;

use crate::Platform;

/// Non-Android baseline: the 375×812 frame mobile designs are authored on.
pub const PORTRAIT_375_812: ReferenceFrame = ReferenceFrame {
    width: 375.0,
    height: 812.0,
};

/// Android baseline: 360×640, the most common Android design grid.
pub const PORTRAIT_360_640: ReferenceFrame = ReferenceFrame {
    width: 360.0,
    height: 640.0,
};

/// The design's baseline screen size.
///
/// Invariant: width and height are strictly positive. The provided constants
/// uphold this; frames built from external config go through
/// [`ReferenceFrame::try_new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ReferenceFrame {
    /// Baseline width in logical pixels
    pub width: f32,

    /// Baseline height in logical pixels
    pub height: f32,
}

impl ReferenceFrame {
    /// Selects the baseline frame for a platform: 360×640 on Android,
    /// 375×812 everywhere else.
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => PORTRAIT_360_640,
            Platform::Ios | Platform::Other => PORTRAIT_375_812,
        }
    }

    /// Builds a frame from externally supplied dimensions, enforcing the
    /// strictly-positive invariant.
    ///
    /// # Errors
    ///
    /// [`SpecError::InvalidDimension`] when either dimension is zero,
    /// negative, or not finite.
    pub fn try_new(width: f32, height: f32) -> Result<Self, SpecError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SpecError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Errors raised when building specification types from external input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SpecError {
    /// Reference frame dimensions must be strictly positive and finite.
    #[error("reference frame dimensions must be strictly positive, got {width}x{height}")]
    InvalidDimension {
        /// The rejected width
        width: f32,
        /// The rejected height
        height: f32,
    },
}

//! Spacing scale
//!
//! The layout grid runs on 4-unit steps of the reference frame. Semantic
//! names cover the common steps; [`Spacing::step`] reaches arbitrary ones.

use scale_engine::Scaler;

/// Reference-frame units per spacing step.
pub const STEP_UNIT: f32 = 4.0;

/// Semantic spacing values in logical pixels.
///
/// Computed once per viewport; recompute after rotation/resize.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Spacing {
    /// 4 reference units
    pub xs: f32,
    /// 8 reference units
    pub sm: f32,
    /// 16 reference units
    pub md: f32,
    /// 24 reference units
    pub lg: f32,
    /// 32 reference units
    pub xl: f32,
    /// 48 reference units
    pub xxl: f32,
}

impl Spacing {
    /// Computes the spacing table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            xs: scaler.width_percent(4.0),
            sm: scaler.width_percent(8.0),
            md: scaler.width_percent(16.0),
            lg: scaler.width_percent(24.0),
            xl: scaler.width_percent(32.0),
            xxl: scaler.width_percent(48.0),
        }
    }

    /// An arbitrary step on the 4-unit grid: step `n` is the scaled
    /// equivalent of `4 × n` reference units.
    ///
    /// # Examples
    ///
    /// ```
    /// use scale_engine::Scaler;
    /// use scale_specs::devices::IPHONE_X;
    /// use scale_tokens::spacing::Spacing;
    ///
    /// let scaler = Scaler::new(IPHONE_X);
    /// assert_eq!(Spacing::step(&scaler, 4), 16.0);
    /// ```
    pub fn step(scaler: &Scaler, n: u32) -> f32 {
        scaler.width_percent(n as f32 * STEP_UNIT)
    }
}

//! Breakpoint classification
//!
//! Threshold comparisons against the viewport width. The three classes are
//! mutually exclusive and exhaustive for any non-negative width.

/// Widths at or above this classify as tablet.
pub const TABLET_MIN_WIDTH: f32 = 768.0;

/// Widths at or above this classify as desktop.
pub const DESKTOP_MIN_WIDTH: f32 = 1024.0;

/// Device class derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FormFactor {
    /// width < 768
    Phone,
    /// 768 ≤ width < 1024
    Tablet,
    /// width ≥ 1024
    Desktop,
}

impl FormFactor {
    /// Classifies a viewport width in logical pixels.
    ///
    /// # Examples
    ///
    /// ```
    /// use scale_engine::breakpoints::FormFactor;
    ///
    /// assert_eq!(FormFactor::classify(320.0), FormFactor::Phone);
    /// assert_eq!(FormFactor::classify(800.0), FormFactor::Tablet);
    /// assert_eq!(FormFactor::classify(1200.0), FormFactor::Desktop);
    /// ```
    pub fn classify(width: f32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            FormFactor::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            FormFactor::Tablet
        } else {
            FormFactor::Phone
        }
    }

    /// Returns `true` for [`FormFactor::Phone`].
    pub const fn is_phone(self) -> bool {
        matches!(self, FormFactor::Phone)
    }

    /// Returns `true` for [`FormFactor::Tablet`].
    pub const fn is_tablet(self) -> bool {
        matches!(self, FormFactor::Tablet)
    }

    /// Returns `true` for [`FormFactor::Desktop`].
    pub const fn is_desktop(self) -> bool {
        matches!(self, FormFactor::Desktop)
    }
}

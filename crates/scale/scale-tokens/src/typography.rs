//! Type scale
//!
//! Font sizes and matching line heights, both run through the engine's
//! font-size conversion so they land on whole pixels.

use scale_engine::Scaler;

/// Font size scale in whole logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FontSizes {
    /// Captions, badges (10 reference px)
    pub xs: f32,
    /// Secondary text (12 reference px)
    pub sm: f32,
    /// Body text (14 reference px)
    pub md: f32,
    /// Emphasized body (16 reference px)
    pub lg: f32,
    /// Section titles (18 reference px)
    pub xl: f32,
    /// Screen titles (20 reference px)
    pub xxl: f32,
    /// Hero numbers, prices (24 reference px)
    pub display: f32,
}

impl FontSizes {
    /// Computes the font-size table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            xs: scaler.font_size(10.0),
            sm: scaler.font_size(12.0),
            md: scaler.font_size(14.0),
            lg: scaler.font_size(16.0),
            xl: scaler.font_size(18.0),
            xxl: scaler.font_size(20.0),
            display: scaler.font_size(24.0),
        }
    }
}

/// Line heights paired with the font scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LineHeights {
    /// For xs/sm text (16 reference px)
    pub sm: f32,
    /// For md text (20 reference px)
    pub md: f32,
    /// For lg/xl text (24 reference px)
    pub lg: f32,
    /// For xxl/display text (28 reference px)
    pub xl: f32,
}

impl LineHeights {
    /// Computes the line-height table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            sm: scaler.font_size(16.0),
            md: scaler.font_size(20.0),
            lg: scaler.font_size(24.0),
            xl: scaler.font_size(28.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale_specs::devices::{IPHONE_X, NEXUS_5, PIXEL_7};

    #[test]
    fn test_reference_device_values() {
        let fonts = FontSizes::compute(&Scaler::new(IPHONE_X));
        assert_eq!(fonts.sm, 12.0);
        assert_eq!(fonts.md, 14.0);
        assert_eq!(fonts.display, 24.0);
    }

    #[test]
    fn test_all_sizes_whole_pixels() {
        for scaler in [Scaler::new(PIXEL_7), Scaler::new(NEXUS_5)] {
            let fonts = FontSizes::compute(&scaler);
            for px in [fonts.xs, fonts.sm, fonts.md, fonts.lg, fonts.xl, fonts.xxl, fonts.display] {
                assert_eq!(px, libm::roundf(px), "font sizes must be integers");
            }
        }
    }

    #[test]
    fn test_line_heights_exceed_font_sizes() {
        let scaler = Scaler::new(PIXEL_7);
        let fonts = FontSizes::compute(&scaler);
        let lines = LineHeights::compute(&scaler);
        assert!(lines.sm >= fonts.sm);
        assert!(lines.md >= fonts.md);
        assert!(lines.lg >= fonts.lg);
        assert!(lines.xl >= fonts.xxl);
    }

    #[test]
    fn test_scale_is_monotonic() {
        let fonts = FontSizes::compute(&Scaler::new(PIXEL_7));
        let ordered = [fonts.xs, fonts.sm, fonts.md, fonts.lg, fonts.xl, fonts.xxl, fonts.display];
        for (smaller, larger) in ordered.iter().zip(ordered.iter().skip(1)) {
            assert!(smaller <= larger);
        }
    }
}

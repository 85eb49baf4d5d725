//! Padding, margin, and corner radius presets

use scale_engine::Scaler;

/// Padding presets in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Padding {
    /// 4 reference units
    pub xs: f32,
    /// 8 reference units
    pub sm: f32,
    /// 12 reference units
    pub md: f32,
    /// 16 reference units
    pub lg: f32,
    /// 24 reference units
    pub xl: f32,
}

impl Padding {
    /// Computes the padding table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            xs: scaler.width_percent(4.0),
            sm: scaler.width_percent(8.0),
            md: scaler.width_percent(12.0),
            lg: scaler.width_percent(16.0),
            xl: scaler.width_percent(24.0),
        }
    }
}

/// Margin presets in logical pixels. Same steps as [`Padding`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Margin {
    /// 4 reference units
    pub xs: f32,
    /// 8 reference units
    pub sm: f32,
    /// 12 reference units
    pub md: f32,
    /// 16 reference units
    pub lg: f32,
    /// 24 reference units
    pub xl: f32,
}

impl Margin {
    /// Computes the margin table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            xs: scaler.width_percent(4.0),
            sm: scaler.width_percent(8.0),
            md: scaler.width_percent(12.0),
            lg: scaler.width_percent(16.0),
            xl: scaler.width_percent(24.0),
        }
    }
}

/// Corner radius presets in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct BorderRadius {
    /// Inputs, chips (4 reference units)
    pub sm: f32,
    /// Cards, buttons (8 reference units)
    pub md: f32,
    /// Sheets, modals (12 reference units)
    pub lg: f32,
    /// Fully rounded: oversized so the scaled value always exceeds any real
    /// element's half-height (999 reference units)
    pub pill: f32,
}

impl BorderRadius {
    /// Computes the radius table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            sm: scaler.width_percent(4.0),
            md: scaler.width_percent(8.0),
            lg: scaler.width_percent(12.0),
            pill: scaler.width_percent(999.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale_specs::devices::{IPHONE_X, IPAD_AIR_11};

    #[test]
    fn test_reference_device_values() {
        let scaler = Scaler::new(IPHONE_X);
        let padding = Padding::compute(&scaler);
        assert_eq!(padding.xs, 4.0);
        assert_eq!(padding.xl, 24.0);

        let radius = BorderRadius::compute(&scaler);
        assert_eq!(radius.md, 8.0);
        assert_eq!(radius.pill, 999.0);
    }

    #[test]
    fn test_padding_and_margin_share_steps() {
        let scaler = Scaler::new(IPAD_AIR_11);
        let padding = Padding::compute(&scaler);
        let margin = Margin::compute(&scaler);
        assert_eq!(padding.xs, margin.xs);
        assert_eq!(padding.xl, margin.xl);
    }

    #[test]
    fn test_pill_dwarfs_everything() {
        let radius = BorderRadius::compute(&Scaler::new(IPAD_AIR_11));
        assert!(radius.pill > 1000.0);
        assert!(radius.pill > radius.lg * 10.0);
    }
}

//! Component dimension presets
//!
//! Fixed design-time dimensions for the recurring marketplace UI pieces:
//! icons, product imagery, buttons, cards, and modals. Widths scale with the
//! width axis, heights with the height axis.

use scale_engine::Scaler;

/// A width × height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Extent {
    /// Width in logical pixels
    pub width: f32,
    /// Height in logical pixels
    pub height: f32,
}

impl Extent {
    /// Scales a reference-frame `width × height` pair.
    fn compute(scaler: &Scaler, width: f32, height: f32) -> Self {
        Self {
            width: scaler.width_percent(width),
            height: scaler.height_percent(height),
        }
    }
}

/// Icon sizes in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct IconSize {
    /// Inline/list icons (16 reference units)
    pub sm: f32,
    /// Tab bar, actions (24 reference units)
    pub md: f32,
    /// Feature icons (32 reference units)
    pub lg: f32,
}

impl IconSize {
    /// Computes the icon-size table for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            sm: scaler.width_percent(16.0),
            md: scaler.width_percent(24.0),
            lg: scaler.width_percent(32.0),
        }
    }
}

/// Product imagery presets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ImageDimensions {
    /// List row thumbnail (64×64)
    pub thumbnail: Extent,
    /// Grid card image (160×120)
    pub card: Extent,
    /// Detail-screen hero image (375×220, full reference width)
    pub hero: Extent,
}

impl ImageDimensions {
    /// Computes the image presets for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            thumbnail: Extent::compute(scaler, 64.0, 64.0),
            card: Extent::compute(scaler, 160.0, 120.0),
            hero: Extent::compute(scaler, 375.0, 220.0),
        }
    }
}

/// Button sizing presets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ButtonDimensions {
    /// Compact button height (32 reference units)
    pub height_sm: f32,
    /// Default tap-target height (44 reference units)
    pub height_md: f32,
    /// Prominent CTA height (52 reference units)
    pub height_lg: f32,
    /// Minimum width so short labels stay tappable (120 reference units)
    pub min_width: f32,
}

impl ButtonDimensions {
    /// Computes the button presets for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            height_sm: scaler.height_percent(32.0),
            height_md: scaler.height_percent(44.0),
            height_lg: scaler.height_percent(52.0),
            min_width: scaler.width_percent(120.0),
        }
    }
}

/// Card sizing presets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct CardDimensions {
    /// Two-up product grid card (168×220)
    pub product: Extent,
    /// Full-width promo banner (343×140)
    pub banner: Extent,
}

impl CardDimensions {
    /// Computes the card presets for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            product: Extent::compute(scaler, 168.0, 220.0),
            banner: Extent::compute(scaler, 343.0, 140.0),
        }
    }
}

/// Modal sizing presets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ModalDimensions {
    /// Dialog width (327 reference units: reference width minus two 24-unit gutters)
    pub width: f32,
    /// Tallest a sheet may grow (600 reference units)
    pub max_height: f32,
    /// Sheet corner radius (16 reference units)
    pub corner_radius: f32,
}

impl ModalDimensions {
    /// Computes the modal presets for one viewport.
    pub fn compute(scaler: &Scaler) -> Self {
        Self {
            width: scaler.width_percent(327.0),
            max_height: scaler.height_percent(600.0),
            corner_radius: scaler.width_percent(16.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale_specs::devices::{IPHONE_X, IPHONE_SE_2, PIXEL_7};

    #[test]
    fn test_reference_device_values() {
        let scaler = Scaler::new(IPHONE_X);
        let icons = IconSize::compute(&scaler);
        assert_eq!(icons.md, 24.0);

        let images = ImageDimensions::compute(&scaler);
        assert_eq!(images.thumbnail.width, 64.0);
        assert_eq!(images.hero.width, 375.0);
        assert_eq!(images.hero.height, 220.0);

        let buttons = ButtonDimensions::compute(&scaler);
        assert_eq!(buttons.height_md, 44.0);
        assert_eq!(buttons.min_width, 120.0);
    }

    #[test]
    fn test_hero_spans_viewport_width() {
        // 375 reference units is the full reference width, so the hero image
        // tracks the actual viewport width on every device.
        for vp in [IPHONE_X, IPHONE_SE_2, PIXEL_7] {
            let scaler = Scaler::new(vp);
            let images = ImageDimensions::compute(&scaler);
            let frame_width = scaler.frame().width;
            let expected = vp.round_to_nearest_pixel(vp.width * 375.0 / frame_width);
            assert_eq!(images.hero.width, expected, "{vp:?}");
        }
    }

    #[test]
    fn test_axes_scale_independently() {
        // SE2 shares the reference width but is shorter: widths stay 1:1
        // while heights shrink.
        let scaler = Scaler::new(IPHONE_SE_2);
        let cards = CardDimensions::compute(&scaler);
        assert_eq!(cards.product.width, 168.0);
        assert!(cards.product.height < 220.0);
    }

    #[test]
    fn test_button_heights_ordered() {
        let buttons = ButtonDimensions::compute(&Scaler::new(PIXEL_7));
        assert!(buttons.height_sm < buttons.height_md);
        assert!(buttons.height_md < buttons.height_lg);
    }

    #[test]
    fn test_modal_narrower_than_viewport_on_reference() {
        let modal = ModalDimensions::compute(&Scaler::new(IPHONE_X));
        assert!(modal.width < IPHONE_X.width);
        assert_eq!(modal.corner_radius, 16.0);
    }
}

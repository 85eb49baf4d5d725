//! Viewport value type
//!
//! A snapshot of the screen area a layout pass targets. The engine has no
//! subscription model: callers sample the host environment, build a
//! [`Viewport`], and re-sample on rotation or resize.

use crate::Platform;

/// The visible screen area in logical pixels, plus pixel density and platform.
///
/// A `Viewport` is a plain value: nothing in this workspace reads ambient
/// screen state. Whoever talks to the host framework captures one of these
/// and passes it down explicitly, which also makes every computation trivially
/// reproducible with synthetic viewports in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Viewport {
    /// Width in logical pixels
    pub width: f32,

    /// Height in logical pixels
    pub height: f32,

    /// Physical pixels per logical pixel (e.g. 3.0 on an iPhone X)
    pub pixel_density: f32,

    /// Platform the host reports
    pub platform: Platform,
}

impl Viewport {
    /// Creates a viewport from raw host-reported values.
    pub const fn new(width: f32, height: f32, pixel_density: f32, platform: Platform) -> Self {
        Self {
            width,
            height,
            pixel_density,
            platform,
        }
    }

    /// Width / height ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// `true` when height is at least width.
    ///
    /// A square viewport counts as portrait, matching how mobile hosts report
    /// the un-rotated orientation.
    pub fn is_portrait(&self) -> bool {
        self.height >= self.width
    }

    /// `true` when width exceeds height.
    pub fn is_landscape(&self) -> bool {
        !self.is_portrait()
    }

    /// The same viewport with width and height swapped.
    ///
    /// Handy for rotation tests; density and platform are unchanged.
    pub const fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            pixel_density: self.pixel_density,
            platform: self.platform,
        }
    }

    /// Snaps a logical-pixel value to the nearest value exactly representable
    /// on this viewport's physical pixel grid (increments of
    /// `1 / pixel_density`), reported back in logical pixels.
    ///
    /// A degenerate density (zero, negative, or non-finite) passes the value
    /// through unsnapped instead of poisoning the result with NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use scale_specs::{Platform, Viewport};
    ///
    /// let vp = Viewport::new(375.0, 812.0, 2.0, Platform::Ios);
    /// assert_eq!(vp.round_to_nearest_pixel(10.3), 10.5);
    /// assert_eq!(vp.round_to_nearest_pixel(10.2), 10.0);
    /// ```
    pub fn round_to_nearest_pixel(&self, value: f32) -> f32 {
        if !self.pixel_density.is_finite() || self.pixel_density <= 0.0 {
            return value;
        }
        libm::roundf(value * self.pixel_density) / self.pixel_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_viewport() -> Viewport {
        Viewport::new(375.0, 812.0, 3.0, Platform::Ios)
    }

    #[test]
    fn test_aspect_ratio() {
        let vp = test_viewport();
        assert!((vp.aspect_ratio() - 0.4618).abs() < 0.001);
    }

    #[test]
    fn test_orientation() {
        let vp = test_viewport();
        assert!(vp.is_portrait());
        assert!(!vp.is_landscape());

        let rotated = vp.rotated();
        assert!(rotated.is_landscape());
        assert_eq!(rotated.width, 812.0);
        assert_eq!(rotated.height, 375.0);
        assert_eq!(rotated.pixel_density, vp.pixel_density);
        assert_eq!(rotated.platform, vp.platform);
    }

    #[test]
    fn test_square_counts_as_portrait() {
        let vp = Viewport::new(500.0, 500.0, 2.0, Platform::Other);
        assert!(vp.is_portrait());
    }

    #[test]
    fn test_round_to_nearest_pixel() {
        let vp = test_viewport();
        // 3x grid: 10.2 * 3 = 30.6 rounds to 31 physical px
        let snapped = vp.round_to_nearest_pixel(10.2);
        assert!((snapped - (10.0 + 1.0 / 3.0)).abs() < 1e-5);

        // 10.1 * 3 = 30.3 rounds back down
        assert_eq!(vp.round_to_nearest_pixel(10.1), 10.0);

        // Already on the grid
        assert_eq!(vp.round_to_nearest_pixel(10.0), 10.0);
    }

    #[test]
    fn test_round_preserves_sign() {
        let vp = Viewport::new(375.0, 812.0, 2.0, Platform::Ios);
        assert_eq!(vp.round_to_nearest_pixel(-10.3), -10.5);
    }

    #[test]
    fn test_round_degenerate_density_passes_through() {
        let zero = Viewport::new(375.0, 812.0, 0.0, Platform::Other);
        assert_eq!(zero.round_to_nearest_pixel(10.37), 10.37);

        let negative = Viewport::new(375.0, 812.0, -2.0, Platform::Other);
        assert_eq!(negative.round_to_nearest_pixel(10.37), 10.37);

        let nan = Viewport::new(375.0, 812.0, f32::NAN, Platform::Other);
        assert_eq!(nan.round_to_nearest_pixel(10.37), 10.37);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let vp = test_viewport();
        let json = serde_json::to_string(&vp).unwrap();
        let back: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vp);
    }
}

//! Apple device viewports
//!
//! Logical point sizes and scale factors from Apple's published display specs.

use crate::{Platform, Viewport};

/// iPhone X / XS / 11 Pro (375×812 @3x)
///
/// Matches the non-Android reference frame exactly, so every width-percent
/// conversion on this device is the identity (up to pixel snapping).
pub const IPHONE_X: Viewport = Viewport::new(375.0, 812.0, 3.0, Platform::Ios);

/// iPhone SE 2nd/3rd gen (375×667 @2x)
///
/// Same logical width as the reference frame, shorter height: height-percent
/// conversions shrink while width-percent conversions stay 1:1.
pub const IPHONE_SE_2: Viewport = Viewport::new(375.0, 667.0, 2.0, Platform::Ios);

/// iPhone 15 Pro Max (430×932 @3x)
pub const IPHONE_15_PRO_MAX: Viewport = Viewport::new(430.0, 932.0, 3.0, Platform::Ios);

/// iPad Air 11" (820×1180 @2x)
///
/// First preset past the 768 tablet breakpoint.
pub const IPAD_AIR_11: Viewport = Viewport::new(820.0, 1180.0, 2.0, Platform::Ios);

/// iPad Pro 12.9" (1024×1366 @2x)
///
/// Sits exactly on the desktop breakpoint boundary (width 1024 classifies as
/// desktop, not tablet).
pub const IPAD_PRO_12_9: Viewport = Viewport::new(1024.0, 1366.0, 2.0, Platform::Ios);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iphone_x_is_reference_sized() {
        assert_eq!(IPHONE_X.width, 375.0);
        assert_eq!(IPHONE_X.height, 812.0);
        assert_eq!(IPHONE_X.platform, Platform::Ios);
    }

    #[test]
    fn test_all_presets_portrait() {
        for vp in [IPHONE_X, IPHONE_SE_2, IPHONE_15_PRO_MAX, IPAD_AIR_11, IPAD_PRO_12_9] {
            assert!(vp.is_portrait(), "{vp:?} should be portrait");
            assert!(vp.pixel_density >= 2.0);
        }
    }
}

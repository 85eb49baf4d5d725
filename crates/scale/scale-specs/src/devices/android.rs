//! Android device viewports
//!
//! Logical dp sizes and density factors for common Android handsets.

use crate::{Platform, Viewport};

/// Nexus 5 (360×640 @3x)
///
/// Matches the Android reference frame exactly: the identity device for
/// Android scaling.
pub const NEXUS_5: Viewport = Viewport::new(360.0, 640.0, 3.0, Platform::Android);

/// Galaxy S8 (360×740 @3x)
///
/// Reference width with a taller 18.5:9 panel.
pub const GALAXY_S8: Viewport = Viewport::new(360.0, 740.0, 3.0, Platform::Android);

/// Pixel 7 (412×915 @2.625x)
///
/// Fractional density, the preset that actually exercises pixel-grid
/// snapping.
pub const PIXEL_7: Viewport = Viewport::new(412.0, 915.0, 2.625, Platform::Android);

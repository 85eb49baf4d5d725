//! Desktop-class viewports

use crate::{Platform, Viewport};

/// 1080p desktop window (1920×1080 @1x)
///
/// Well past the 1024 desktop breakpoint; used to pin down desktop-regime
/// behavior in tests.
pub const DESKTOP_FHD: Viewport = Viewport::new(1920.0, 1080.0, 1.0, Platform::Other);

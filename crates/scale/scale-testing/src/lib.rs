//! Responsive-Layout Testing Utilities
//!
//! Synthetic viewport fixtures and pixel-grid assertions so layout tests
//! never need a running UI host.
//!
//! # Quick start
//!
//! ```
//! use scale_engine::Scaler;
//! use scale_testing::{assert_on_pixel_grid, phone, tablet};
//!
//! let scaler = Scaler::new(phone());
//! assert!(scaler.is_phone());
//!
//! let px = scaler.width_percent(37.5);
//! assert_on_pixel_grid(px, phone().pixel_density);
//!
//! assert!(Scaler::new(tablet()).is_tablet());
//! ```

// Assertion helpers panic by design; that is the deliverable of this crate.
#![allow(clippy::panic)]
#![warn(clippy::print_stdout)]

pub use scale_engine::{FormFactor, Scaler};
pub use scale_specs::{devices, Platform, Viewport};
pub use scale_tokens::DesignTokens;

/// A synthetic non-Android viewport at 2x density.
///
/// The quickest way to a `Viewport` when only the dimensions matter.
pub fn viewport(width: f32, height: f32) -> Viewport {
    Viewport::new(width, height, 2.0, Platform::Other)
}

/// A synthetic Android viewport.
pub fn android(width: f32, height: f32, pixel_density: f32) -> Viewport {
    Viewport::new(width, height, pixel_density, Platform::Android)
}

/// A synthetic iOS viewport.
pub fn ios(width: f32, height: f32, pixel_density: f32) -> Viewport {
    Viewport::new(width, height, pixel_density, Platform::Ios)
}

/// A viewport squarely in the phone regime (width 320).
pub fn phone() -> Viewport {
    viewport(320.0, 568.0)
}

/// A viewport squarely in the tablet regime (width 800).
pub fn tablet() -> Viewport {
    viewport(800.0, 1280.0)
}

/// A viewport squarely in the desktop regime (width 1200).
pub fn desktop() -> Viewport {
    viewport(1200.0, 900.0)
}

/// The smallest representable logical-pixel step on a device grid.
pub fn pixel_increment(pixel_density: f32) -> f32 {
    1.0 / pixel_density
}

/// Asserts two pixel values are equal within `tolerance`.
///
/// # Panics
///
/// When the values differ by more than `tolerance`.
#[track_caller]
pub fn assert_px_eq(actual: f32, expected: f32, tolerance: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "pixel value {actual} differs from {expected} by {diff} (tolerance {tolerance})"
    );
}

/// Asserts a logical-pixel value lies on the device pixel grid for the given
/// density (i.e. is a whole number of physical pixels).
///
/// # Panics
///
/// When the value is off the grid by more than a rounding epsilon.
#[track_caller]
pub fn assert_on_pixel_grid(value: f32, pixel_density: f32) {
    let physical = value * pixel_density;
    let off_by = (physical - physical.round()).abs();
    assert!(
        off_by < 1e-3,
        "{value} logical px is {off_by} physical px off the 1/{pixel_density} grid"
    );
}

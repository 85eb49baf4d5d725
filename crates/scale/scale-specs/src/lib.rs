//! Viewport And Reference-Frame Specifications
//!
//! Value types describing the screen a UI is being laid out for: logical
//! dimensions, pixel density, platform identifier, and the fixed reference
//! design frame that design-time sizes were authored against.
//!
//! # Features
//!
//! - **no_std compatible** - Works without the standard library
//! - **Device presets** - Pre-configured viewports for common phones and tablets
//! - **Serde support** - Optional serialization/deserialization for TOML/JSON configs
//! - **Pixel-grid snapping** - Round logical values to the device pixel grid
//!
//! # Example
//!
//! ```
//! use scale_specs::devices::IPHONE_X;
//!
//! let vp = IPHONE_X;
//! assert_eq!(vp.width, 375.0);
//! assert!(vp.is_portrait());
//!
//! // Snap a fractional logical value to the 3x pixel grid (31 / 3)
//! let snapped = vp.round_to_nearest_pixel(10.2);
//! assert!((snapped - 10.0 - 1.0 / 3.0).abs() < 1e-4);
//! ```
//!
//! # Custom Viewports
//!
//! ```
//! use scale_specs::{Platform, Viewport};
//!
//! const KIOSK: Viewport = Viewport::new(1280.0, 800.0, 1.0, Platform::Other);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod devices;
mod frame;
mod platform;
mod viewport;

pub use frame::{ReferenceFrame, SpecError, PORTRAIT_360_640, PORTRAIT_375_812};
pub use platform::Platform;
pub use viewport::Viewport;

//! Responsive Scaling Engine
//!
//! Converts design-time sizes (percentages of a reference screen, or
//! reference-frame pixel sizes) into concrete pixel values for an actual
//! device viewport.
//!
//! # Architecture
//!
//! - [`scaler::Scaler`] - the conversion engine, built from an explicit [`scale_specs::Viewport`]
//! - [`input::SizeValue`] - numeric-or-text size arguments with lenient and strict resolution
//! - [`breakpoints::FormFactor`] - phone/tablet/desktop classification
//!
//! # Example
//!
//! ```
//! use scale_engine::prelude::*;
//! use scale_specs::devices::IPHONE_X;
//!
//! let scaler = Scaler::new(IPHONE_X);
//!
//! // iPhone X matches the reference frame, so conversion is the identity
//! assert_eq!(scaler.width_percent(100.0), 100.0);
//! assert_eq!(scaler.font_size(14.0), 14.0);
//! assert!(scaler.is_phone());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod breakpoints;
pub mod input;
pub mod scaler;

pub mod prelude {
    //! Everything layout code needs in one import.

    pub use crate::breakpoints::{FormFactor, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};
    pub use crate::input::{ParseSizeError, SizeValue};
    pub use crate::scaler::Scaler;
}

pub use breakpoints::FormFactor;
pub use input::{ParseSizeError, SizeValue};
pub use scaler::Scaler;

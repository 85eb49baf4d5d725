//! Semantic Design Tokens
//!
//! Pre-computed scale tables (spacing steps, font sizes, component
//! dimensions) derived from the scaling engine for one viewport.
//!
//! Every table is a frozen snapshot: computing it walks a fixed list of
//! design-time literals through [`scale_engine::Scaler`] once. Nothing
//! updates automatically when the viewport changes; a caller handling
//! rotation or resize samples a fresh viewport and recomputes. The tables
//! are a convenience cache, not a reactive binding.
//!
//! # Example
//!
//! ```
//! use scale_engine::Scaler;
//! use scale_specs::devices::IPHONE_X;
//! use scale_tokens::DesignTokens;
//!
//! let tokens = DesignTokens::compute(&Scaler::new(IPHONE_X));
//! assert_eq!(tokens.spacing.md, 16.0);
//! assert_eq!(tokens.font_sizes.sm, 12.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod components;
pub mod insets;
pub mod spacing;
pub mod typography;

pub mod prelude {
    //! Every token table in one import.

    pub use crate::components::{
        ButtonDimensions, CardDimensions, Extent, IconSize, ImageDimensions, ModalDimensions,
    };
    pub use crate::insets::{BorderRadius, Margin, Padding};
    pub use crate::spacing::Spacing;
    pub use crate::typography::{FontSizes, LineHeights};
    pub use crate::DesignTokens;
}

use scale_engine::Scaler;

use crate::components::{ButtonDimensions, CardDimensions, IconSize, ImageDimensions, ModalDimensions};
use crate::insets::{BorderRadius, Margin, Padding};
use crate::spacing::Spacing;
use crate::typography::{FontSizes, LineHeights};

/// Every token table, computed together for one viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DesignTokens {
    /// Spacing scale
    pub spacing: Spacing,
    /// Font size scale
    pub font_sizes: FontSizes,
    /// Line height scale
    pub line_heights: LineHeights,
    /// Padding presets
    pub padding: Padding,
    /// Margin presets
    pub margin: Margin,
    /// Corner radius presets
    pub border_radius: BorderRadius,
    /// Icon sizes
    pub icon_size: IconSize,
    /// Image dimension presets
    pub image_dimensions: ImageDimensions,
    /// Button dimension presets
    pub button_dimensions: ButtonDimensions,
    /// Card dimension presets
    pub card_dimensions: CardDimensions,
    /// Modal dimension presets
    pub modal_dimensions: ModalDimensions,
}

impl DesignTokens {
    /// Computes the full token set from a scaler snapshot.
    pub fn compute(scaler: &Scaler) -> Self {
        let tokens = Self {
            spacing: Spacing::compute(scaler),
            font_sizes: FontSizes::compute(scaler),
            line_heights: LineHeights::compute(scaler),
            padding: Padding::compute(scaler),
            margin: Margin::compute(scaler),
            border_radius: BorderRadius::compute(scaler),
            icon_size: IconSize::compute(scaler),
            image_dimensions: ImageDimensions::compute(scaler),
            button_dimensions: ButtonDimensions::compute(scaler),
            card_dimensions: CardDimensions::compute(scaler),
            modal_dimensions: ModalDimensions::compute(scaler),
        };
        tracing::debug!(
            width = f64::from(scaler.viewport().width),
            height = f64::from(scaler.viewport().height),
            "design tokens computed"
        );
        tokens
    }
}

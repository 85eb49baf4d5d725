//! The scaling engine
//!
//! Pure, stateless conversion from design-time sizes to device pixel values.
//! A [`Scaler`] is a snapshot of one viewport; nothing updates behind the
//! caller's back. On rotation or resize, sample a fresh viewport and build a
//! new `Scaler`.

use scale_specs::{ReferenceFrame, Viewport};

use crate::breakpoints::FormFactor;
use crate::input::{parse_strict, ParseSizeError, SizeValue};

/// Deterministic, platform-aware size conversion for one viewport.
///
/// All operations are pure functions of `(viewport, frame, argument)`.
/// Calling the same method twice with the same inputs returns the identical
/// value; there is no hidden state to mutate.
///
/// # Examples
///
/// ```
/// use scale_engine::Scaler;
/// use scale_specs::devices::{IPHONE_X, NEXUS_5};
///
/// // Both reference devices convert 1:1
/// assert_eq!(Scaler::new(IPHONE_X).width_percent(100.0), 100.0);
/// assert_eq!(Scaler::new(NEXUS_5).width_percent(100.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    viewport: Viewport,
    frame: ReferenceFrame,
}

impl Scaler {
    /// Builds a scaler for a viewport, selecting the reference frame by the
    /// viewport's platform (360×640 on Android, 375×812 otherwise).
    pub fn new(viewport: Viewport) -> Self {
        let frame = ReferenceFrame::for_platform(viewport.platform);
        tracing::debug!(
            width = f64::from(viewport.width),
            height = f64::from(viewport.height),
            density = f64::from(viewport.pixel_density),
            platform = ?viewport.platform,
            "scaler initialized"
        );
        Self { viewport, frame }
    }

    /// Builds a scaler against an explicit reference frame, for designs
    /// authored on a non-standard baseline.
    pub const fn with_frame(viewport: Viewport, frame: ReferenceFrame) -> Self {
        Self { viewport, frame }
    }

    /// The viewport this scaler was built from.
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The reference frame in effect.
    pub const fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Ratio of actual to reference width.
    pub fn width_scale(&self) -> f32 {
        self.viewport.width / self.frame.width
    }

    /// Ratio of actual to reference height.
    pub fn height_scale(&self) -> f32 {
        self.viewport.height / self.frame.height
    }

    /// Converts a percentage of the reference width into logical pixels,
    /// snapped to the device pixel grid.
    ///
    /// Accepts a number or numeric text (lenient parse: unparsable input
    /// coerces to `0`). Negative input yields a negative size; rejecting it
    /// is the caller's decision.
    pub fn width_percent<'a>(&self, value: impl Into<SizeValue<'a>>) -> f32 {
        let v = value.into().resolve_lenient();
        self.viewport
            .round_to_nearest_pixel(self.viewport.width * v / self.frame.width)
    }

    /// Converts a percentage of the reference height into logical pixels,
    /// snapped to the device pixel grid. Same contract as
    /// [`width_percent`](Self::width_percent).
    pub fn height_percent<'a>(&self, value: impl Into<SizeValue<'a>>) -> f32 {
        let v = value.into().resolve_lenient();
        self.viewport
            .round_to_nearest_pixel(self.viewport.height * v / self.frame.height)
    }

    /// Strict-parsing variant of [`width_percent`](Self::width_percent):
    /// signals instead of coercing.
    ///
    /// # Errors
    ///
    /// [`ParseSizeError`] when the text is empty, not wholly numeric, or not
    /// finite.
    pub fn try_width_percent(&self, raw: &str) -> Result<f32, ParseSizeError> {
        let v = parse_strict(raw)?;
        Ok(self
            .viewport
            .round_to_nearest_pixel(self.viewport.width * v / self.frame.width))
    }

    /// Strict-parsing variant of [`height_percent`](Self::height_percent).
    ///
    /// # Errors
    ///
    /// [`ParseSizeError`] when the text is empty, not wholly numeric, or not
    /// finite.
    pub fn try_height_percent(&self, raw: &str) -> Result<f32, ParseSizeError> {
        let v = parse_strict(raw)?;
        Ok(self
            .viewport
            .round_to_nearest_pixel(self.viewport.height * v / self.frame.height))
    }

    /// Scales a reference-frame font size to this viewport, returning a
    /// whole-number pixel value.
    ///
    /// On Android the scaled size is snapped to the device pixel grid before
    /// the final whole-number rounding; other platforms round directly. The
    /// asymmetry accounts for density-dependent snapping artifacts the host
    /// framework exposes on Android only, and is preserved exactly.
    pub fn font_size(&self, size: f32) -> f32 {
        let raw = size * self.width_scale();
        if self.viewport.platform.is_android() {
            libm::roundf(self.viewport.round_to_nearest_pixel(raw))
        } else {
            libm::roundf(raw)
        }
    }

    /// The breakpoint class of this viewport's width.
    pub fn form_factor(&self) -> FormFactor {
        FormFactor::classify(self.viewport.width)
    }

    /// `true` when the viewport width is below the tablet breakpoint.
    pub fn is_phone(&self) -> bool {
        self.form_factor().is_phone()
    }

    /// `true` when the viewport width is in the tablet band.
    pub fn is_tablet(&self) -> bool {
        self.form_factor().is_tablet()
    }

    /// `true` when the viewport width is at or past the desktop breakpoint.
    pub fn is_desktop(&self) -> bool {
        self.form_factor().is_desktop()
    }

    /// Returns exactly one of the three inputs, selected by the breakpoint
    /// classifiers. No interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// use scale_engine::Scaler;
    /// use scale_specs::{Platform, Viewport};
    ///
    /// let phone = Scaler::new(Viewport::new(320.0, 568.0, 2.0, Platform::Ios));
    /// assert_eq!(phone.responsive_value(1, 2, 3), 1);
    /// ```
    pub fn responsive_value<T>(&self, phone: T, tablet: T, desktop: T) -> T {
        match self.form_factor() {
            FormFactor::Phone => phone,
            FormFactor::Tablet => tablet,
            FormFactor::Desktop => desktop,
        }
    }
}

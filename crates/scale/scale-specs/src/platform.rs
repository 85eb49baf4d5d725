//! Host platform identification

/// Platform the host environment reports itself as.
///
/// The scaling rules differ between Android and everything else: Android uses
/// a 360×640 reference frame and snaps scaled font sizes to the device pixel
/// grid before rounding. Any identifier that is not recognised maps to
/// [`Platform::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// Android devices
    Android,
    /// iPhone / iPad
    Ios,
    /// Anything else (web, desktop, unknown)
    #[default]
    Other,
}

impl Platform {
    /// Maps a host-reported identifier string to a platform.
    ///
    /// Matching is case-insensitive; unrecognised identifiers become
    /// [`Platform::Other`] rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scale_specs::Platform;
    ///
    /// assert_eq!(Platform::from_identifier("android"), Platform::Android);
    /// assert_eq!(Platform::from_identifier("iOS"), Platform::Ios);
    /// assert_eq!(Platform::from_identifier("windows"), Platform::Other);
    /// ```
    pub fn from_identifier(id: &str) -> Self {
        if id.eq_ignore_ascii_case("android") {
            Platform::Android
        } else if id.eq_ignore_ascii_case("ios") {
            Platform::Ios
        } else {
            Platform::Other
        }
    }

    /// Returns `true` for [`Platform::Android`].
    pub const fn is_android(self) -> bool {
        matches!(self, Platform::Android)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identifier_known() {
        assert_eq!(Platform::from_identifier("android"), Platform::Android);
        assert_eq!(Platform::from_identifier("ANDROID"), Platform::Android);
        assert_eq!(Platform::from_identifier("ios"), Platform::Ios);
    }

    #[test]
    fn test_from_identifier_unknown_is_other() {
        assert_eq!(Platform::from_identifier("web"), Platform::Other);
        assert_eq!(Platform::from_identifier(""), Platform::Other);
        assert_eq!(Platform::from_identifier("macos"), Platform::Other);
    }

    #[test]
    fn test_is_android() {
        assert!(Platform::Android.is_android());
        assert!(!Platform::Ios.is_android());
        assert!(!Platform::Other.is_android());
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(Platform::default(), Platform::Other);
    }
}

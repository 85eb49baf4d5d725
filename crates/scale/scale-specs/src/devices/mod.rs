//! Pre-configured device viewports
//!
//! Common phone, tablet, and desktop viewport templates for tests, benches,
//! and demos.

pub mod android;
pub mod apple;
pub mod desktop;

pub use android::*;
pub use apple::*;
pub use desktop::*;

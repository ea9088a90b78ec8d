//! # tonal
//!
//! Parse, convert and adjust color strings written as hex, `rgb(...)` or
//! `rgba(...)`.
//!
//! ## Quick Start
//!
//! ```
//! use tonal::ColorFormat;
//!
//! assert_eq!(tonal::parse("#abc", ColorFormat::Rgb), "rgb(170,187,204)");
//! assert_eq!(tonal::percentage_alpha("rgba(10,20,30,0.5)", 0.5), "rgba(10,20,30,0.25)");
//! assert_eq!(tonal::parse("not-a-color", ColorFormat::Hex), "not-a-color");
//! ```
//!
//! ## Core Concepts
//!
//! - **ChannelRecord**: red/green/blue (0-255), alpha, derived HSL and the source format
//! - **ColorFormat**: hex, rgb or rgba; chooses the serializer
//! - **Converter**: runs parse and adjustment operations under a set of [`Quirks`]
//! - **Quirks**: switches for the legacy hex channel order, rgb alpha field,
//!   hue formula and lightness behavior
//!
//! The free functions at the crate root use `Converter::new()`, which keeps
//! the legacy behavior.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adjust;
pub mod channel;
pub mod detect;
pub mod error;
pub mod format;
pub mod hsl;
pub mod options;
pub mod serialize;
pub mod validate;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::adjust::Converter;
    pub use crate::channel::ChannelRecord;
    pub use crate::error::ColorError;
    pub use crate::format::ColorFormat;
    pub use crate::hsl::{Hsl, HueFormula};
    pub use crate::options::{HexChannelOrder, LightnessMode, Quirks, RgbAlpha};
}

// Re-export key types at crate root
pub use adjust::Converter;
pub use channel::ChannelRecord;
pub use detect::{is_hex_color, is_rgb_color, is_rgba_color};
pub use error::ColorError;
pub use format::ColorFormat;
pub use hsl::{Hsl, HueFormula};
pub use options::{HexChannelOrder, LightnessMode, Quirks, RgbAlpha};

/// Extract a color string into a [`ChannelRecord`].
///
/// # Errors
///
/// Returns `ColorError` if the string is not a hex, rgb or rgba color.
pub fn extract(color: &str) -> Result<ChannelRecord, ColorError> {
    Converter::new().extract(color)
}

/// Convert `color` to `format`. Returns `color` unchanged if it is not a color.
#[must_use]
pub fn parse(color: &str, format: ColorFormat) -> String {
    Converter::new().parse(color, format)
}

/// Convert `color` to the format named `format` (`"hex"`, `"rgb"`, `"rgba"`).
#[must_use]
pub fn parse_as(color: &str, format: &str) -> String {
    Converter::new().parse_as(color, format)
}

/// Lighten or darken `color` by `amount`.
#[must_use]
pub fn adjust_lightness(color: &str, amount: f64) -> String {
    Converter::new().adjust_lightness(color, amount)
}

/// Shift the alpha of `color` by `amount`.
#[must_use]
pub fn adjust_alpha(color: &str, amount: f64) -> String {
    Converter::new().adjust_alpha(color, amount)
}

/// Scale the alpha of `color` by `amount`.
#[must_use]
pub fn percentage_alpha(color: &str, amount: f64) -> String {
    Converter::new().percentage_alpha(color, amount)
}

//! Format detection.
//!
//! Detection runs hex first, then `rgba(`, then `rgb(`. The two prefix
//! checks are literal and case-sensitive.

use regex::Regex;
use std::sync::LazyLock;

use crate::format::ColorFormat;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?:[0-9a-fA-F]{3}){1,2}$").expect("valid regex"));

/// Returns true if `s` is 3 or 6 hex digits with an optional leading `#`.
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// Returns true if `s` starts with `rgba(`.
#[must_use]
pub fn is_rgba_color(s: &str) -> bool {
    s.starts_with("rgba(")
}

/// Returns true if `s` starts with `rgb(`.
#[must_use]
pub fn is_rgb_color(s: &str) -> bool {
    s.starts_with("rgb(")
}

/// Classify a color string, or `None` if it is not in a known notation.
#[must_use]
pub fn detect(s: &str) -> Option<ColorFormat> {
    let format = if is_hex_color(s) {
        ColorFormat::Hex
    } else if is_rgba_color(s) {
        ColorFormat::Rgba
    } else if is_rgb_color(s) {
        ColorFormat::Rgb
    } else {
        log::trace!("no color format matched {s:?}");
        return None;
    };
    log::trace!("detected {format} for {s:?}");
    Some(format)
}

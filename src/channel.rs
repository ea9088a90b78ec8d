//! The channel record and the parsers that produce it.
//!
//! # Examples
//!
//! ```
//! use tonal::channel::ChannelRecord;
//! use tonal::format::ColorFormat;
//!
//! let record = ChannelRecord::extract("rgb(300, -10, 50)").unwrap();
//! assert_eq!(record.format, ColorFormat::Rgb);
//! assert_eq!((record.red, record.green, record.blue), (255, 0, 50));
//!
//! let short = ChannelRecord::extract("#abc").unwrap();
//! let long = ChannelRecord::extract("#aabbcc").unwrap();
//! assert_eq!(short.red, long.red);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::detect::detect;
use crate::error::ColorError;
use crate::format::ColorFormat;
use crate::hsl::{Hsl, HueFormula};
use crate::options::{HexChannelOrder, Quirks, RgbAlpha};
use crate::serialize::serialize;
use crate::validate::{channel_u8, clamp_fraction};

/// Value used for an rgb/rgba channel field that is absent.
pub const MISSING_CHANNEL: i64 = 0;

/// Value used for an rgb/rgba alpha field that is absent.
pub const MISSING_ALPHA: f64 = 0.0;

/// Alpha of hex colors, and of rgb colors under [`RgbAlpha::Opaque`].
pub const OPAQUE: f64 = 1.0;

/// A parsed color: channels, alpha, derived HSL and the notation it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRecord {
    /// Format the record was parsed from; adjustments serialize back to it.
    pub format: ColorFormat,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Alpha fraction, `0.0..=1.0`.
    pub alpha: f64,
    /// Hue in degrees, `0.0..=360.0`.
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl ChannelRecord {
    /// Create a record from channels, deriving HSL with the legacy formula.
    #[must_use]
    pub fn new(format: ColorFormat, red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::with_formula(format, red, green, blue, alpha, HueFormula::default())
    }

    /// Create a record from channels, deriving HSL with `formula`.
    #[must_use]
    pub fn with_formula(
        format: ColorFormat,
        red: u8,
        green: u8,
        blue: u8,
        alpha: f64,
        formula: HueFormula,
    ) -> Self {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = Hsl::from_rgb(red, green, blue, formula);
        Self {
            format,
            red,
            green,
            blue,
            alpha: clamp_fraction(alpha, false),
            hue,
            saturation,
            lightness,
        }
    }

    /// Extract a color string into a record.
    ///
    /// # Errors
    ///
    /// - `Empty` if the string is empty or whitespace
    /// - `Unrecognized` if it is not hex, rgb or rgba
    /// - `InvalidHexLength` if a hex body is not 3 or 6 digits
    pub fn extract(color: &str) -> Result<Self, ColorError> {
        Self::extract_with(color, Quirks::default())
    }

    /// Extract a color string, using `quirks` for the rgb alpha field and
    /// the hue formula.
    ///
    /// # Errors
    ///
    /// See [`ChannelRecord::extract`].
    pub fn extract_with(color: &str, quirks: Quirks) -> Result<Self, ColorError> {
        let color = color.trim();
        if color.is_empty() {
            return Err(ColorError::Empty);
        }

        let format = detect(color).ok_or_else(|| ColorError::Unrecognized(color.to_string()))?;
        let (red, green, blue, alpha) = match format {
            ColorFormat::Hex => parse_hex(color)?,
            ColorFormat::Rgb => parse_rgb(color, quirks.rgb_alpha),
            ColorFormat::Rgba => parse_rgba(color),
        };

        Ok(Self::with_formula(
            format,
            red,
            green,
            blue,
            alpha,
            quirks.hue_formula,
        ))
    }

    /// The derived HSL fields.
    #[must_use]
    pub const fn hsl(&self) -> Hsl {
        Hsl {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }

    /// Recompute the HSL fields from the current channels.
    pub fn rederive(&mut self, formula: HueFormula) {
        let hsl = Hsl::from_rgb(self.red, self.green, self.blue, formula);
        self.hue = hsl.hue;
        self.saturation = hsl.saturation;
        self.lightness = hsl.lightness;
    }

    /// Rewrite red/green/blue so the color has `lightness`, keeping its
    /// conventional hue and saturation, then rederive HSL with `formula`.
    pub fn relight(&mut self, lightness: f64, formula: HueFormula) {
        let mut hsl = Hsl::from_rgb(self.red, self.green, self.blue, HueFormula::Normalized);
        hsl.lightness = clamp_fraction(lightness, false);
        (self.red, self.green, self.blue) = hsl.to_rgb();
        self.rederive(formula);
    }
}

impl fmt::Display for ChannelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self, self.format, HexChannelOrder::default()))
    }
}

impl FromStr for ChannelRecord {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::extract(s)
    }
}

impl TryFrom<&str> for ChannelRecord {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::extract(value)
    }
}

type Channels = (u8, u8, u8, f64);

/// Parse a hex body, with or without `#`, expanding the 3-digit shorthand.
pub(crate) fn parse_hex(color: &str) -> Result<Channels, ColorError> {
    let digits = color.replace('#', "");
    let digits = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits,
        _ => return Err(ColorError::InvalidHexLength(color.to_string())),
    };
    if !digits.is_ascii() {
        return Err(ColorError::Unrecognized(color.to_string()));
    }

    let pair = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorError::Unrecognized(color.to_string()))
    };
    Ok((pair(0)?, pair(2)?, pair(4)?, OPAQUE))
}

/// Parse `rgb(r,g,b)`. Under [`RgbAlpha::Legacy`] an optional fourth
/// field is read as alpha.
pub(crate) fn parse_rgb(color: &str, mode: RgbAlpha) -> Channels {
    let fields = split_fields(color, "rgb(");
    let (red, green, blue) = channels_from(&fields);
    let alpha = match mode {
        RgbAlpha::Legacy => alpha_from(&fields, color),
        RgbAlpha::Opaque => OPAQUE,
    };
    (red, green, blue, alpha)
}

/// Parse `rgba(r,g,b,a)`.
pub(crate) fn parse_rgba(color: &str) -> Channels {
    let fields = split_fields(color, "rgba(");
    let (red, green, blue) = channels_from(&fields);
    (red, green, blue, alpha_from(&fields, color))
}

fn alpha_from(fields: &[String], color: &str) -> f64 {
    match fields.get(3) {
        Some(field) => clamp_fraction(lenient_fraction(field), false),
        None => {
            log::debug!("alpha missing in {color:?}, defaulting to {MISSING_ALPHA}");
            MISSING_ALPHA
        }
    }
}

fn split_fields(color: &str, prefix: &str) -> Vec<String> {
    let body = color.strip_prefix(prefix).unwrap_or(color);
    body.replace([')', ' '], "")
        .split(',')
        .map(str::to_string)
        .collect()
}

fn channels_from(fields: &[String]) -> (u8, u8, u8) {
    let channel = |i: usize| match fields.get(i) {
        Some(field) => channel_u8(lenient_integer(field)),
        None => {
            log::debug!("channel {i} missing, defaulting to {MISSING_CHANNEL}");
            channel_u8(MISSING_CHANNEL)
        }
    };
    (channel(0), channel(1), channel(2))
}

/// Integer, else decimal truncated toward zero, else 0.
fn lenient_integer(field: &str) -> i64 {
    let field = field.trim();
    if let Ok(value) = field.parse::<i64>() {
        return value;
    }
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            #[expect(clippy::cast_possible_truncation, reason = "saturating cast, clamped afterwards")]
            let truncated = value.trunc() as i64;
            truncated
        }
        _ => {
            log::debug!("unparseable channel {field:?}, using 0");
            0
        }
    }
}

fn lenient_fraction(field: &str) -> f64 {
    let field = field.trim();
    field.parse::<f64>().unwrap_or_else(|_| {
        log::debug!("unparseable alpha {field:?}, using 0");
        0.0
    })
}

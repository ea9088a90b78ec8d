//! The three textual notations a color can be written in.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Notation a color string was written in, and the notation it is
/// serialized back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `#rrggbb` or `#rgb`.
    #[default]
    Hex,
    /// `rgb(r,g,b)`.
    Rgb,
    /// `rgba(r,g,b,a)`.
    Rgba,
}

impl ColorFormat {
    /// All formats, in detection order.
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgba, Self::Rgb];

    /// Get the lowercase name of this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
        }
    }

    /// Returns true if the notation carries an alpha channel.
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            _ => Err(ColorError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<&str> for ColorFormat {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

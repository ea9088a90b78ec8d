//! Error type shared by the parsing layers.

use std::fmt;

/// Error type for color extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input was empty (or only whitespace).
    Empty,
    /// The input matches none of the hex / rgb / rgba notations.
    Unrecognized(String),
    /// A hex body that is neither 3 nor 6 digits long.
    InvalidHexLength(String),
    /// A target format name other than `hex`, `rgb` or `rgba`.
    UnknownFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty color string"),
            Self::Unrecognized(s) => write!(f, "Not a color: {s}"),
            Self::InvalidHexLength(s) => write!(f, "Invalid hex length: {s}"),
            Self::UnknownFormat(s) => write!(f, "Unknown color format: {s}"),
        }
    }
}

impl std::error::Error for ColorError {}

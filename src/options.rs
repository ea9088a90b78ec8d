//! Behavioral switches for the historically quirky parts of the conversion.
//!
//! The defaults follow the legacy behavior:
//!
//! - hex is written red, blue, green
//! - `rgb(...)` reads an optional fourth field as alpha, defaulting to 0
//! - hue uses the mixed-scale formula (see [`HueFormula`])
//! - lightening/darkening only touches the stored lightness field
//!
//! One legacy detail is not kept: the hue branch is chosen by comparing the
//! normalized channels with the normalized maximum. The historical code
//! compared the raw 0-255 channel instead, so for example `rgb(1,255,0)`
//! derives a hue of 60 here where it used to derive 360.
//!
//! [`Quirks::standard`] turns every switch into its conventional behavior.
//!
//! ```
//! use tonal::adjust::Converter;
//! use tonal::format::ColorFormat;
//! use tonal::options::{HexChannelOrder, Quirks};
//!
//! let legacy = Converter::new();
//! assert_eq!(legacy.parse("rgb(18,52,86)", ColorFormat::Hex), "#125634");
//!
//! let fixed = Converter::with_quirks(Quirks::new().hex_order(HexChannelOrder::Standard));
//! assert_eq!(fixed.parse("rgb(18,52,86)", ColorFormat::Hex), "#123456");
//! ```

pub use crate::hsl::HueFormula;

/// Channel order used when writing hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HexChannelOrder {
    /// Red, blue, green.
    #[default]
    Legacy,
    /// Red, green, blue.
    Standard,
}

/// Alpha of a record parsed from `rgb(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RgbAlpha {
    /// An optional fourth field is read as alpha; absent means 0.
    #[default]
    Legacy,
    /// Always 1, like hex.
    Opaque,
}

/// What a lightness adjustment does to the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightnessMode {
    /// Only the lightness field changes; serialized output is unchanged.
    #[default]
    Preserve,
    /// Red, green and blue are recomputed from the adjusted lightness.
    Apply,
}

/// Set of behavioral switches used by a [`Converter`](crate::adjust::Converter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quirks {
    pub hex_order: HexChannelOrder,
    pub rgb_alpha: RgbAlpha,
    pub hue_formula: HueFormula,
    pub lightness: LightnessMode,
}

impl Quirks {
    /// Legacy behavior (same as `Quirks::default()`).
    #[must_use]
    pub const fn new() -> Self {
        Self::legacy()
    }

    /// Legacy behavior for every switch.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            hex_order: HexChannelOrder::Legacy,
            rgb_alpha: RgbAlpha::Legacy,
            hue_formula: HueFormula::Legacy,
            lightness: LightnessMode::Preserve,
        }
    }

    /// Conventional behavior for every switch.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            hex_order: HexChannelOrder::Standard,
            rgb_alpha: RgbAlpha::Opaque,
            hue_formula: HueFormula::Normalized,
            lightness: LightnessMode::Apply,
        }
    }

    /// Set the hex channel order.
    #[must_use]
    pub const fn hex_order(mut self, order: HexChannelOrder) -> Self {
        self.hex_order = order;
        self
    }

    /// Set how `rgb(...)` alpha is read.
    #[must_use]
    pub const fn rgb_alpha(mut self, mode: RgbAlpha) -> Self {
        self.rgb_alpha = mode;
        self
    }

    /// Set the hue formula.
    #[must_use]
    pub const fn hue_formula(mut self, formula: HueFormula) -> Self {
        self.hue_formula = formula;
        self
    }

    /// Set the lightness adjustment mode.
    #[must_use]
    pub const fn lightness(mut self, mode: LightnessMode) -> Self {
        self.lightness = mode;
        self
    }
}

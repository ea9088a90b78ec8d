//! Conversion and tonal adjustment of color strings.
//!
//! Every operation here takes text and returns text. Input that cannot be
//! extracted comes back unchanged. Adjustments always serialize to the
//! format the input was written in.
//!
//! ```
//! use tonal::adjust::Converter;
//!
//! let converter = Converter::new();
//! assert_eq!(converter.percentage_alpha("rgba(10,20,30,0.5)", 0.5), "rgba(10,20,30,0.25)");
//! assert_eq!(converter.adjust_alpha("not-a-color", 0.5), "not-a-color");
//! ```

use crate::channel::ChannelRecord;
use crate::error::ColorError;
use crate::format::ColorFormat;
use crate::options::{LightnessMode, Quirks};
use crate::serialize::serialize;
use crate::validate::clamp_fraction;

/// Entry point for conversions, carrying the [`Quirks`] to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Converter {
    quirks: Quirks,
}

impl Converter {
    /// Create a converter with legacy behavior.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_quirks(Quirks::legacy())
    }

    /// Create a converter with the given switches.
    #[must_use]
    pub const fn with_quirks(quirks: Quirks) -> Self {
        Self { quirks }
    }

    /// The switches in use.
    #[must_use]
    pub const fn quirks(&self) -> Quirks {
        self.quirks
    }

    /// Extract a color string into a record.
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if the string is not a hex, rgb or rgba color.
    pub fn extract(&self, color: &str) -> Result<ChannelRecord, ColorError> {
        ChannelRecord::extract_with(color, self.quirks)
    }

    /// Render a record in `format`.
    #[must_use]
    pub fn serialize(&self, record: &ChannelRecord, format: ColorFormat) -> String {
        serialize(record, format, self.quirks.hex_order)
    }

    /// Convert `color` to `format`, or return it unchanged if it is not a color.
    #[must_use]
    pub fn parse(&self, color: &str, format: ColorFormat) -> String {
        match self.extract(color) {
            Ok(record) => self.serialize(&record, format),
            Err(err) => passthrough(color, &err),
        }
    }

    /// Like [`Converter::parse`] with the target given by name
    /// (`"hex"`, `"rgb"`, `"rgba"`). An unknown name also returns `color`
    /// unchanged.
    #[must_use]
    pub fn parse_as(&self, color: &str, format: &str) -> String {
        match format.parse::<ColorFormat>() {
            Ok(format) => self.parse(color, format),
            Err(err) => passthrough(color, &err),
        }
    }

    /// Lighten (positive `amount`) or darken (negative) by up to 1.0.
    ///
    /// With [`LightnessMode::Preserve`] the output channels are unchanged.
    #[must_use]
    pub fn adjust_lightness(&self, color: &str, amount: f64) -> String {
        self.adjust(color, |record| {
            let delta = clamp_fraction(amount, true);
            let lightness = clamp_fraction(record.lightness + delta, false);
            match self.quirks.lightness {
                LightnessMode::Preserve => record.lightness = lightness,
                LightnessMode::Apply => record.relight(lightness, self.quirks.hue_formula),
            }
        })
    }

    /// Add `amount` (clamped to `-1.0..=1.0`) to alpha.
    #[must_use]
    pub fn adjust_alpha(&self, color: &str, amount: f64) -> String {
        self.adjust(color, |record| {
            let delta = clamp_fraction(amount, true);
            record.alpha = clamp_fraction(record.alpha + delta, false);
        })
    }

    /// Multiply alpha by `amount` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn percentage_alpha(&self, color: &str, amount: f64) -> String {
        self.adjust(color, |record| {
            let factor = clamp_fraction(amount, false);
            record.alpha = clamp_fraction(record.alpha * factor, false);
        })
    }

    fn adjust(&self, color: &str, mutate: impl FnOnce(&mut ChannelRecord)) -> String {
        match self.extract(color) {
            Ok(mut record) => {
                mutate(&mut record);
                self.serialize(&record, record.format)
            }
            Err(err) => passthrough(color, &err),
        }
    }
}

fn passthrough(color: &str, err: &ColorError) -> String {
    log::debug!("returning input unchanged: {err}");
    color.to_string()
}

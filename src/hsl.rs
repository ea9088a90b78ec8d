//! RGB to HSL derivation.
//!
//! `HueFormula::Legacy` reproduces the historical hue computation, in which
//! the per-channel helper ratios subtract the raw 0-255 channel from the
//! normalized maximum. For most chromatic colors that pushes the fractional
//! hue out of range before it is clamped, so the result pins to 0 or 360.
//! `HueFormula::Normalized` uses the normalized channel and wraps the result,
//! which gives the conventional hue.

use crate::validate::clamp_fraction;

/// How the hue term is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HueFormula {
    /// Raw channels in the helper ratios, fractional hue clamped to `[0, 1]`.
    #[default]
    Legacy,
    /// Normalized channels in the helper ratios, fractional hue wrapped to `[0, 1)`.
    Normalized,
}

/// Hue (degrees), saturation and lightness (both `0.0..=1.0`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Create an HSL value, clamping each component into range.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = if hue.is_nan() { 0.0 } else { hue.clamp(0.0, 360.0) };
        Self {
            hue,
            saturation: clamp_fraction(saturation, false),
            lightness: clamp_fraction(lightness, false),
        }
    }

    /// Derive HSL from 0-255 channels.
    #[must_use]
    pub fn from_rgb(red: u8, green: u8, blue: u8, formula: HueFormula) -> Self {
        let r = f64::from(red) / 255.0;
        let g = f64::from(green) / 255.0;
        let b = f64::from(blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        let lightness = f64::midpoint(max, min);

        if chroma < f64::EPSILON {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let saturation = if lightness < 0.5 {
            chroma / (max + min)
        } else {
            chroma / (2.0 - max - min)
        };

        let (nr, ng, nb) = match formula {
            HueFormula::Legacy => (f64::from(red), f64::from(green), f64::from(blue)),
            HueFormula::Normalized => (r, g, b),
        };
        let ratio = |channel: f64| ((max - channel) / 6.0 + chroma / 2.0) / chroma;
        let (rh, gh, bh) = (ratio(nr), ratio(ng), ratio(nb));

        let hue = if (r - max).abs() < f64::EPSILON {
            bh - gh
        } else if (g - max).abs() < f64::EPSILON {
            1.0 / 3.0 + rh - bh
        } else {
            2.0 / 3.0 + gh - rh
        };

        let hue = match formula {
            HueFormula::Legacy => clamp_fraction(hue, false),
            HueFormula::Normalized => hue.rem_euclid(1.0),
        };

        log::trace!(
            "hsl of ({red},{green},{blue}) via {formula:?}: h={} s={saturation} l={lightness}",
            hue * 360.0
        );

        Self {
            hue: hue * 360.0,
            saturation,
            lightness,
        }
    }

    /// Convert back to 0-255 channels.
    #[must_use]
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let Self {
            hue,
            saturation,
            lightness,
        } = *self;

        if saturation < f64::EPSILON {
            let gray = to_channel(lightness);
            return (gray, gray, gray);
        }

        let h = hue / 360.0;
        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_channel(fraction: f64) -> u8 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to 0-255 before the cast"
    )]
    let channel = (clamp_fraction(fraction, false) * 255.0).round() as u8;
    channel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_grayscale_is_achromatic() {
        for formula in [HueFormula::Legacy, HueFormula::Normalized] {
            let hsl = Hsl::from_rgb(128, 128, 128, formula);
            assert_close(hsl.hue, 0.0);
            assert_close(hsl.saturation, 0.0);
            assert_close(hsl.lightness, 128.0 / 255.0);
        }
    }

    #[test]
    fn test_black_and_white_lightness() {
        assert_close(Hsl::from_rgb(0, 0, 0, HueFormula::Legacy).lightness, 0.0);
        assert_close(Hsl::from_rgb(255, 255, 255, HueFormula::Legacy).lightness, 1.0);
    }

    #[test]
    fn test_primaries_match_in_both_formulas() {
        // with a full-range max and a zero min the raw and normalized
        // helper ratios coincide
        for formula in [HueFormula::Legacy, HueFormula::Normalized] {
            assert_close(Hsl::from_rgb(255, 0, 0, formula).hue, 0.0);
            assert_close(Hsl::from_rgb(0, 255, 0, formula).hue, 120.0);
            assert_close(Hsl::from_rgb(0, 0, 255, formula).hue, 240.0);
        }
    }

    #[test]
    fn test_legacy_hue_pins_to_range_edges() {
        // the raw green channel drives the helper ratio far below zero
        let orange = Hsl::from_rgb(255, 128, 0, HueFormula::Legacy);
        assert_close(orange.hue, 360.0);
        assert_close(orange.saturation, 1.0);
        assert_close(orange.lightness, 0.5);

        let azure = Hsl::from_rgb(0, 128, 255, HueFormula::Legacy);
        assert_close(azure.hue, 0.0);
    }

    #[test]
    fn test_legacy_branch_uses_normalized_max() {
        // green is the normalized max, so the green branch is taken even
        // though the raw red channel equals 1.0
        let hsl = Hsl::from_rgb(1, 255, 0, HueFormula::Legacy);
        assert_close(hsl.hue, 60.0);
    }

    #[test]
    fn test_normalized_hue() {
        let orange = Hsl::from_rgb(255, 128, 0, HueFormula::Normalized);
        assert_close(orange.hue, 60.0 * 128.0 / 255.0);

        let rose = Hsl::from_rgb(255, 0, 128, HueFormula::Normalized);
        assert_close(rose.hue, 360.0 - 60.0 * 128.0 / 255.0);
    }

    #[test]
    fn test_saturation_branches() {
        // dark: lightness < 0.5
        let dark = Hsl::from_rgb(128, 0, 0, HueFormula::Normalized);
        assert_close(dark.saturation, 1.0);
        // light: lightness >= 0.5
        let light = Hsl::from_rgb(255, 128, 128, HueFormula::Normalized);
        let (max, min) = (1.0, 128.0 / 255.0);
        assert_close(light.saturation, (max - min) / (2.0 - max - min));
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Hsl::new(0.0, 0.0, 0.5).to_rgb(), (128, 128, 128));
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_rgb(), (255, 0, 0));
        assert_eq!(Hsl::new(120.0, 1.0, 0.5).to_rgb(), (0, 255, 0));
        assert_eq!(Hsl::new(240.0, 1.0, 0.5).to_rgb(), (0, 0, 255));
        assert_eq!(Hsl::new(200.0, 0.7, 0.0).to_rgb(), (0, 0, 0));
    }

    #[test]
    fn test_new_clamps() {
        let hsl = Hsl::new(400.0, 2.0, -1.0);
        assert_close(hsl.hue, 360.0);
        assert_close(hsl.saturation, 1.0);
        assert_close(hsl.lightness, 0.0);
    }
}

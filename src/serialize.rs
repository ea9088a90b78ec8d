//! Rendering a [`ChannelRecord`] back to text.

use crate::channel::ChannelRecord;
use crate::format::ColorFormat;
use crate::options::HexChannelOrder;

/// Two-digit lowercase hex, `#` prefixed, in `order`.
#[must_use]
pub fn to_hex(record: &ChannelRecord, order: HexChannelOrder) -> String {
    let (second, third) = match order {
        HexChannelOrder::Legacy => (record.blue, record.green),
        HexChannelOrder::Standard => (record.green, record.blue),
    };
    format!("#{:02x}{second:02x}{third:02x}", record.red)
}

/// `rgb(r,g,b)` without spaces.
#[must_use]
pub fn to_rgb(record: &ChannelRecord) -> String {
    format!("rgb({},{},{})", record.red, record.green, record.blue)
}

/// `rgba(r,g,b,a)` without spaces.
#[must_use]
pub fn to_rgba(record: &ChannelRecord) -> String {
    format!(
        "rgba({},{},{},{})",
        record.red,
        record.green,
        record.blue,
        format_alpha(record.alpha)
    )
}

/// Render `record` in `format`.
#[must_use]
pub fn serialize(record: &ChannelRecord, format: ColorFormat, order: HexChannelOrder) -> String {
    match format {
        ColorFormat::Hex => to_hex(record, order),
        ColorFormat::Rgb => to_rgb(record),
        ColorFormat::Rgba => to_rgba(record),
    }
}

/// Shortest decimal form at ten places: `1`, `0.5`, `0.3`.
fn format_alpha(alpha: f64) -> String {
    // adding 0.0 turns -0.0 into 0.0
    let rounded = (alpha * 1e10).round() / 1e10 + 0.0;
    format!("{rounded}")
}

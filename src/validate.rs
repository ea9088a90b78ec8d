//! Range clamping applied wherever a number enters a [`ChannelRecord`].
//!
//! [`ChannelRecord`]: crate::channel::ChannelRecord

/// Clamp an integer channel into `[0, 255]`, or `[-255, 255]` when
/// `allow_negative` is set (used for deltas).
#[must_use]
pub fn clamp_channel(value: i64, allow_negative: bool) -> i64 {
    let floor = if allow_negative { -255 } else { 0 };
    value.clamp(floor, 255)
}

/// Clamp a fraction into `[0, 1]`, or `[-1, 1]` when `allow_negative` is set.
///
/// NaN clamps to `0.0`.
#[must_use]
pub fn clamp_fraction(value: f64, allow_negative: bool) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let floor = if allow_negative { -1.0 } else { 0.0 };
    value.clamp(floor, 1.0)
}

/// Clamp to `[0, 255]` and narrow.
#[must_use]
pub(crate) fn channel_u8(value: i64) -> u8 {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "clamped to 0-255")]
    let narrowed = clamp_channel(value, false) as u8;
    narrowed
}

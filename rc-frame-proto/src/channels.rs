//! RC channel unpacking.
//!
//! The payload carries [`CHANNEL_COUNT`] 12-bit values packed two per three
//! bytes, starting right after the frame type byte:
//!
//! ```text
//! byte:     b0            b1                 b2
//! bits:  7......0    7..4     3..0      7..4     3..0
//!        A[7:0]      A[11:8]  B[7:4]    B[3:0]   B[11:8]
//! ```
//!
//! Note the second value of each pair: its low nibble sits in the high half
//! of the third byte and its middle nibble in the low half of the second.

use crate::DecodeError;

/// Number of RC channels per frame.
pub const CHANNEL_COUNT: usize = 8;

/// Nominal center of a channel, subtracted from every raw value.
pub const CHANNEL_CENTER: i16 = 1500;

/// Nominal lowest pulse width a transmitter sends.
pub const PPM_MIN: i16 = 980;

/// Nominal highest pulse width a transmitter sends.
pub const PPM_MAX: i16 = 2020;

/// Largest raw 12-bit channel value.
pub const RAW_CHANNEL_MAX: u16 = 0x0FFF;

/// Bytes per packed channel pair.
const GROUP_SIZE: usize = 3;

/// Frame type byte followed by every packed pair.
pub const MIN_PAYLOAD_LEN: usize = 1 + CHANNEL_COUNT / 2 * GROUP_SIZE;

/// Decoded channel values as signed offsets from [`CHANNEL_CENTER`].
///
/// Nominally within `PPM_MIN - 1500 ..= PPM_MAX - 1500` (±520), but the
/// decoder does not clamp: any 12-bit raw value is passed through, so the
/// full range is `-1500 ..= 2595`.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channels(pub [i16; CHANNEL_COUNT]);

impl Channels {
    /// Every channel at center.
    pub const CENTERED: Self = Self([0; CHANNEL_COUNT]);

    /// Offset of channel `index`, if it exists.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i16> {
        self.0.get(index).copied()
    }

    /// Channel values as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i16] {
        &self.0
    }
}

/// Split one three-byte group into its two raw 12-bit values.
#[inline]
#[must_use]
pub fn unpack_pair(b0: u8, b1: u8, b2: u8) -> (u16, u16) {
    let first = u16::from(b0) | (u16::from(b1 & 0xF0) << 4);
    let second =
        (u16::from(b1 & 0x0F) << 4) | u16::from(b2 >> 4) | (u16::from(b2 & 0x0F) << 8);
    (first, second)
}

/// Re-center a raw 12-bit value around [`CHANNEL_CENTER`].
#[inline]
fn center(raw: u16) -> i16 {
    // raw is masked to 12 bits and always fits
    (raw & RAW_CHANNEL_MAX) as i16 - CHANNEL_CENTER
}

/// Unpack every channel from an unescaped payload.
///
/// Byte 0 (the frame type) is skipped; bytes `1..MIN_PAYLOAD_LEN` hold the
/// packed pairs. Trailing bytes are ignored.
pub fn decode(payload: &[u8]) -> Result<Channels, DecodeError> {
    let packed = payload
        .get(1..MIN_PAYLOAD_LEN)
        .ok_or(DecodeError::PayloadTooShort { len: payload.len() })?;

    let mut channels = Channels::CENTERED;
    for (pair, group) in channels
        .0
        .chunks_exact_mut(2)
        .zip(packed.chunks_exact(GROUP_SIZE))
    {
        let (first, second) = unpack_pair(group[0], group[1], group[2]);
        pair[0] = center(first);
        pair[1] = center(second);
    }

    Ok(channels)
}

//! Decode error type.

use core::fmt;

/// Reason a frame was rejected.
///
/// Every variant is terminal for the frame that produced it only; the next
/// frame is decoded from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Boundary markers missing or the frame type is not recognized.
    InvalidFraming,
    /// An escape byte was followed by an unknown selector.
    InvalidEscapeSequence(u8),
    /// The payload ended right after an escape byte.
    TruncatedEscapeSequence,
    /// XOR digest of the payload disagrees with the frame's checksum byte.
    ChecksumMismatch {
        /// Checksum byte carried by the frame.
        expected: u8,
        /// Digest computed over the unescaped payload.
        calculated: u8,
    },
    /// Not enough unescaped bytes to unpack every channel.
    PayloadTooShort {
        /// Unescaped payload length that was available.
        len: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFraming => write!(f, "invalid framing"),
            Self::InvalidEscapeSequence(selector) => {
                write!(f, "invalid escape sequence: 0x7D followed by 0x{selector:02X}")
            }
            Self::TruncatedEscapeSequence => write!(f, "escape byte at end of payload"),
            Self::ChecksumMismatch {
                expected,
                calculated,
            } => write!(
                f,
                "checksum mismatch: expected 0x{expected:02X}, calculated 0x{calculated:02X}"
            ),
            Self::PayloadTooShort { len } => write!(f, "payload too short ({len} bytes)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}

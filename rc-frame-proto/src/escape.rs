//! Byte-stuffing removal.
//!
//! Reserved bytes inside a frame body travel as two-byte escape pairs:
//!
//! | On the wire   | Decoded |
//! |---------------|---------|
//! | `0x7D 0x5E`   | `0x7E`  |
//! | `0x7D 0x5D`   | `0x7D`  |

use crate::frame::FRAME_DELIMITER;
use crate::DecodeError;
use core::slice;

/// Escape byte introducing a two-byte escape pair.
pub const ESCAPE: u8 = 0x7D;

/// Selector that decodes to [`FRAME_DELIMITER`].
pub const ESCAPED_DELIMITER: u8 = 0x5E;

/// Selector that decodes to [`ESCAPE`].
pub const ESCAPED_ESCAPE: u8 = 0x5D;

/// Remove byte-stuffing from a frame body.
///
/// Returns an iterator over the unescaped bytes, so a body of any length is
/// decoded without a buffer. Bytes other than [`ESCAPE`] are yielded
/// unchanged, including an unescaped `0x7E`. The output is never longer than
/// the input.
///
/// # Errors
///
/// The iterator yields one error and then ends:
///
/// - [`DecodeError::InvalidEscapeSequence`] for an unknown selector.
/// - [`DecodeError::TruncatedEscapeSequence`] if the body ends on [`ESCAPE`].
pub fn unescape(escaped: &[u8]) -> Unescape<'_> {
    Unescape {
        bytes: escaped.iter(),
        failed: false,
    }
}

/// Iterator returned by [`unescape`].
#[derive(Debug, Clone)]
pub struct Unescape<'a> {
    bytes: slice::Iter<'a, u8>,
    failed: bool,
}

impl Iterator for Unescape<'_> {
    type Item = Result<u8, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let byte = *self.bytes.next()?;
        if byte != ESCAPE {
            return Some(Ok(byte));
        }

        let decoded = match self.bytes.next() {
            Some(&ESCAPED_DELIMITER) => Ok(FRAME_DELIMITER),
            Some(&ESCAPED_ESCAPE) => Ok(ESCAPE),
            Some(&selector) => Err(DecodeError::InvalidEscapeSequence(selector)),
            None => Err(DecodeError::TruncatedEscapeSequence),
        };
        self.failed = decoded.is_err();
        Some(decoded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.bytes.len();
        (remaining.div_ceil(2), Some(remaining))
    }
}

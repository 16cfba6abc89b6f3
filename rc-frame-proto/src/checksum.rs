//! XOR checksum over the unescaped payload.

use crate::DecodeError;

/// XOR all bytes together.
#[inline]
#[must_use]
pub fn xor_fold(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Digest of an unescaped payload: every byte except the last one.
///
/// An empty payload has a digest of zero.
#[inline]
#[must_use]
pub fn digest(payload: &[u8]) -> u8 {
    payload
        .split_last()
        .map_or(0, |(_, covered)| xor_fold(covered))
}

/// Compare the payload digest with the checksum byte carried by the frame.
pub fn verify(expected: u8, payload: &[u8]) -> Result<(), DecodeError> {
    compare(expected, digest(payload))
}

fn compare(expected: u8, calculated: u8) -> Result<(), DecodeError> {
    if calculated == expected {
        Ok(())
    } else {
        Err(DecodeError::ChecksumMismatch {
            expected,
            calculated,
        })
    }
}

/// Running form of [`digest`] for payloads that are never buffered.
///
/// Each byte is folded in only once the next one arrives, so the final value
/// always leaves out the last byte seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Digest {
    folded: u8,
    pending: Option<u8>,
}

impl Digest {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            folded: 0,
            pending: None,
        }
    }

    /// Feed the next unescaped payload byte.
    #[inline]
    pub fn update(&mut self, byte: u8) {
        if let Some(previous) = self.pending.replace(byte) {
            self.folded ^= previous;
        }
    }

    /// Digest of every byte fed so far except the last one.
    #[inline]
    #[must_use]
    pub fn value(&self) -> u8 {
        self.folded
    }

    /// Compare against the checksum byte carried by the frame.
    pub fn verify(&self, expected: u8) -> Result<(), DecodeError> {
        compare(expected, self.folded)
    }
}

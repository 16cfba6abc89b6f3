//! Input source trait and error types.

use core::fmt;
use core::future::Future;
use rc_frame_proto::{Channels, DecodeError};

/// Error type for input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// The received frame failed to decode.
    Decode(DecodeError),
}

impl From<DecodeError> for InputError {
    fn from(err: DecodeError) -> Self {
        InputError::Decode(err)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "decode failed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
        }
    }
}

/// Async trait for RC channel sources.
///
/// A source yields one decoded channel vector per received frame. Frames that
/// fail to decode surface as [`InputError::Decode`] and never produce
/// channels; the next call continues with the next frame.
pub trait InputSource {
    /// Wait for and decode the next frame.
    fn receive(&mut self) -> impl Future<Output = Result<Channels, InputError>>;

    /// Check if the input source is connected/ready.
    fn is_connected(&self) -> bool;
}

//! Output sink and device traits, and their error type.

use crate::types::GamepadState;
use core::fmt;
use core::future::Future;
use rc_frame_proto::Channels;

/// Error type for output operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// Driver/communication I/O error.
    Io,
    /// Device not ready (e.g. not yet plugged in to the host).
    NotReady,
    /// Update rejected by the driver.
    Rejected,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "output I/O error"),
            Self::NotReady => write!(f, "output not ready"),
            Self::Rejected => write!(f, "update rejected"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutputError {}

/// Async trait for consumers of decoded channels.
///
/// The sink owns whatever device state the channels drive and is called once
/// per successfully decoded frame.
pub trait OutputSink {
    /// Hand one decoded channel vector to the consumer.
    fn send(&mut self, channels: &Channels) -> impl Future<Output = Result<(), OutputError>>;

    /// Check if the output is ready to accept data.
    fn is_ready(&self) -> bool;
}

/// A virtual gamepad driver.
///
/// Implemented outside this crate for a concrete driver API.
pub trait GamepadDevice {
    /// Push a full state update to the device.
    fn update(&mut self, state: &GamepadState) -> Result<(), OutputError>;

    /// Check if the device can accept updates.
    fn is_ready(&self) -> bool {
        true
    }
}

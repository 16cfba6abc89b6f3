//! GamepadBridge: connects input sources to output sinks.

use crate::input::{InputError, InputSource};
use crate::output::{OutputError, OutputSink};
use core::fmt;
use log::{error, trace, warn};

/// Frame counters kept by a [`GamepadBridge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeStats {
    /// Frames decoded and handed to the sink.
    pub forwarded: u32,
    /// Frames discarded because they failed to decode.
    pub dropped: u32,
    /// Decoded frames the sink failed to accept.
    pub output_errors: u32,
}

/// A bridge that forwards decoded channels from an input source to an
/// output sink.
///
/// # Error Handling
///
/// An input error discards that frame only: it is logged and counted, the
/// sink is not called, and the next frame is processed normally. The sink
/// therefore only ever sees channels from frames that decoded cleanly.
pub struct GamepadBridge<I, O> {
    input: I,
    output: O,
    stats: BridgeStats,
}

impl<I: InputSource, O: OutputSink> GamepadBridge<I, O> {
    /// Create a new bridge from an input source and output sink.
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            stats: BridgeStats::default(),
        }
    }

    /// Run the bridge, forwarding channels indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            // Failures are logged and counted in process_one.
            let _ = self.process_one().await;
        }
    }

    /// Process a single frame and forward it to the output.
    ///
    /// Returns the result of the operation for testing purposes.
    pub async fn process_one(&mut self) -> Result<(), BridgeError> {
        let channels = match self.input.receive().await {
            Ok(channels) => channels,
            Err(e) => {
                warn!("Dropping frame: {}", e);
                self.stats.dropped = self.stats.dropped.wrapping_add(1);
                return Err(BridgeError::Input(e));
            }
        };

        trace!("Decoded channels: {:?}", channels);
        if let Err(e) = self.output.send(&channels).await {
            error!("Output error: {}", e);
            self.stats.output_errors = self.stats.output_errors.wrapping_add(1);
            return Err(BridgeError::Output(e));
        }

        self.stats.forwarded = self.stats.forwarded.wrapping_add(1);
        Ok(())
    }

    /// Frame counters since the bridge was created.
    pub fn stats(&self) -> BridgeStats {
        self.stats
    }

    /// Get a reference to the input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get a reference to the output sink.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output sink.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Decompose the bridge into its input and output components.
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

/// Error type for bridge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError {
    /// Error from the input source.
    Input(InputError),
    /// Error from the output sink.
    Output(OutputError),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BridgeError {}

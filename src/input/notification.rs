use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use gamepad_core::{InputError, InputSource};
use log::{info, trace, warn};
use rc_frame_proto::{decode_frame, Channels, RawFrame};

/// Bounded queue of raw frames between the transport callback and the
/// decoding task.
///
/// Use a `CriticalSectionRawMutex` when notifications arrive on another
/// thread; `NoopRawMutex` is enough when both sides share an executor.
pub type FrameQueue<M, const N: usize> = Channel<M, RawFrame, N>;

/// Error returned to the transport when a notification cannot be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotifyError {
    /// Notification is larger than any valid frame.
    FrameTooLong { len: usize },
    /// Decoder has fallen behind; the notification was dropped.
    QueueFull,
}

impl core::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::FrameTooLong { len } => write!(f, "notification too long ({len} bytes)"),
            Self::QueueFull => write!(f, "frame queue full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotifyError {}

/// Transport side of the hand-off.
///
/// Call [`on_notification`](Self::on_notification) from the notification
/// callback with each received buffer. It copies the bytes and never blocks.
pub struct NotificationHandler<'ch, M: RawMutex, const N: usize> {
    frames: Sender<'ch, M, RawFrame, N>,
}

impl<'ch, M: RawMutex, const N: usize> NotificationHandler<'ch, M, N> {
    #[must_use]
    pub fn new(queue: &'ch FrameQueue<M, N>) -> Self {
        Self {
            frames: queue.sender(),
        }
    }

    /// Queue one notification payload as a raw frame.
    pub fn on_notification(&self, data: &[u8]) -> Result<(), NotifyError> {
        let frame = RawFrame::from_slice(data).map_err(|()| {
            warn!("Dropping {} byte notification: too long", data.len());
            NotifyError::FrameTooLong { len: data.len() }
        })?;

        self.frames.try_send(frame).map_err(|_| {
            warn!("Frame queue full, dropping notification");
            NotifyError::QueueFull
        })
    }
}

impl<M: RawMutex, const N: usize> Clone for NotificationHandler<'_, M, N> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
        }
    }
}

/// Decoding side of the hand-off.
///
/// Waits for queued frames in arrival order and decodes each one on its own.
/// A frame that fails to decode is reported as [`InputError::Decode`] and
/// the following call moves on to the next frame.
pub struct NotificationSource<'ch, M: RawMutex, const N: usize> {
    frames: Receiver<'ch, M, RawFrame, N>,
    /// True once a frame has decoded successfully.
    connected: bool,
    received: u32,
}

impl<'ch, M: RawMutex, const N: usize> NotificationSource<'ch, M, N> {
    #[must_use]
    pub fn new(queue: &'ch FrameQueue<M, N>) -> Self {
        Self {
            frames: queue.receiver(),
            connected: false,
            received: 0,
        }
    }

    /// Frames taken off the queue so far, valid or not.
    #[inline]
    #[must_use]
    pub fn frames_received(&self) -> u32 {
        self.received
    }
}

impl<M: RawMutex, const N: usize> InputSource for NotificationSource<'_, M, N> {
    async fn receive(&mut self) -> Result<Channels, InputError> {
        let frame = self.frames.receive().await;
        self.received = self.received.wrapping_add(1);
        trace!("Frame received: {} bytes", frame.len());

        let channels = decode_frame(&frame)?;

        if !self.connected {
            info!("First valid frame received");
            self.connected = true;
        }
        Ok(channels)
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Create both ends of the hand-off for `queue`.
#[must_use]
pub fn split<M: RawMutex, const N: usize>(
    queue: &FrameQueue<M, N>,
) -> (NotificationHandler<'_, M, N>, NotificationSource<'_, M, N>) {
    (NotificationHandler::new(queue), NotificationSource::new(queue))
}

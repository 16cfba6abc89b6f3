//! Bridge from BLE RC handset notifications to a virtual gamepad.
//!
//! The handset streams one framed packet of eight RC channels per
//! notification. This crate wires the pieces together:
//!
//! 1. The transport's notification callback hands each buffer to a
//!    [`NotificationHandler`], which queues it without blocking.
//! 2. A [`NotificationSource`] takes frames off the queue in order and
//!    decodes them with [`rc_frame_proto::decode_frame`].
//! 3. A [`GamepadBridge`] forwards every decoded channel vector to an
//!    [`OutputSink`], typically a [`GamepadOutput`] that maps channels to
//!    sticks, trigger and button and updates an injected [`GamepadDevice`].
//!
//! Frames that fail to decode are logged and dropped; the sink only ever sees
//! clean frames.
//!
//! # Example
//!
//! ```
//! use ble_to_gamepad::{split, FrameQueue, GamepadBridge, GamepadOutput};
//! use ble_to_gamepad::{GamepadDevice, GamepadState, OutputError};
//! use embassy_sync::blocking_mutex::raw::NoopRawMutex;
//!
//! struct Printer;
//!
//! impl GamepadDevice for Printer {
//!     fn update(&mut self, state: &GamepadState) -> Result<(), OutputError> {
//!         println!("{state:?}");
//!         Ok(())
//!     }
//! }
//!
//! let queue = FrameQueue::<NoopRawMutex, 8>::new();
//! let (handler, source) = split(&queue);
//! let mut bridge = GamepadBridge::new(source, GamepadOutput::new(Printer));
//!
//! // From the notification callback:
//! handler
//!     .on_notification(&[0x7E, 0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x80, 0x7E])
//!     .unwrap();
//!
//! // From the decoding task (normally `bridge.run().await`):
//! embassy_futures::block_on(bridge.process_one()).unwrap();
//! assert_eq!(bridge.stats().forwarded, 1);
//! ```
//!
//! # Features
//!
//! - **`std`** (default): Host build, `std::error::Error` impls
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`gamepad_core`] for
//! convenience, so consumers only need to depend on this crate.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod input;
pub mod output;

pub use gamepad_core::{
    channels_to_gamepad, decode_frame, AnalogStick, BridgeError, BridgeStats, Buttons,
    ChannelMapping, Channels, DecodeError, GamepadBridge, GamepadDevice, GamepadState,
    InputError, InputSource, OutputError, OutputSink, CHANNEL_COUNT, DEFAULT_MAPPING,
};
pub use input::{split, FrameQueue, NotificationHandler, NotificationSource, NotifyError};
pub use output::GamepadOutput;

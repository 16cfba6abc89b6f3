//! Platform-agnostic gamepad types, channel mapping, and traits.
//!
//! This crate provides the core abstractions between a decoded RC channel
//! stream and a virtual gamepad without any platform-specific dependencies.
//! It can be used both in embedded `no_std` environments and on host.
//!
//! # Overview
//!
//! - [`types`]: Gamepad state ([`GamepadState`], [`Buttons`], [`AnalogStick`])
//! - [`mapping`]: Channel to gamepad conversion ([`channels_to_gamepad`], [`ChannelMapping`])
//! - [`input`]: Input source trait ([`InputSource`])
//! - [`output`]: Output sink and device traits ([`OutputSink`], [`GamepadDevice`])
//! - [`bridge`]: Orchestrates input-to-output flow ([`GamepadBridge`])
//!
//! Frame decoding itself lives in [`rc_frame_proto`]; its channel and error
//! types are re-exported here.
//!
//! # Example
//!
//! ```rust
//! use gamepad_core::{channels_to_gamepad, Buttons, Channels, DEFAULT_MAPPING};
//!
//! let channels = Channels([0, 512, 0, 0, -512, 300, 0, 0]);
//! let state = channels_to_gamepad(&channels, &DEFAULT_MAPPING);
//! assert_eq!(state.left_stick.x, 32767);
//! assert_eq!(state.right_trigger, 0);
//! assert!(state.buttons.contains(Buttons::X));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host use)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod input;
pub mod mapping;
pub mod output;
pub mod types;

// Re-export main types at crate root
pub use bridge::{BridgeError, BridgeStats, GamepadBridge};
pub use input::{InputError, InputSource};
pub use mapping::{
    channel_to_button, channel_to_stick, channel_to_trigger, channels_to_gamepad, ChannelMapping,
    BUTTON_THRESHOLD, DEFAULT_MAPPING, STICK_HALF_RANGE,
};
pub use output::{GamepadDevice, OutputError, OutputSink};
pub use rc_frame_proto::{decode_frame, Channels, DecodeError, CHANNEL_COUNT};
pub use types::{AnalogStick, Buttons, GamepadState};

//! Decoding for the framed RC channel protocol delivered over BLE notifications.
//!
//! Each notification carries one complete frame holding eight RC channels
//! (sticks, a trigger, a switch). Decoding is a fixed pipeline of pure stages:
//!
//! 1. [`frame::validate`] - boundary markers and frame type
//! 2. [`escape::unescape`] - byte-stuffing removal
//! 3. [`checksum::verify`] - XOR checksum
//! 4. [`channels::decode`] - 12-bit channel unpacking
//!
//! [`decode_frame`] runs all four and is the usual entry point.
//!
//! # Wire Format
//!
//! ```text
//! +------+------+---------------------+----------+------+
//! | 0x7E | 0x80 | escaped payload ... | checksum | 0x7E |
//! +------+------+---------------------+----------+------+
//! ```
//!
//! Inside the frame `0x7D 0x5E` stands for `0x7E` and `0x7D 0x5D` for `0x7D`.
//! The unescaped payload starts with the frame type, followed by four
//! three-byte groups each packing two channels.
//!
//! # Example
//!
//! ```
//! use rc_frame_proto::{checksum, decode_frame, Channels};
//!
//! let mut raw = [0u8; 17];
//! raw[0] = 0x7E;
//! raw[1] = 0x80;
//! // 12 bytes of packed channels and one trailing byte are already zero
//! raw[15] = checksum::xor_fold(&raw[1..15]);
//! raw[16] = 0x7E;
//!
//! let channels = decode_frame(&raw).unwrap();
//! assert_eq!(channels, Channels([-1500; 8]));
//! ```
//!
//! # Features
//!
//! - **`std`**: Implement `std::error::Error` for [`DecodeError`]
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and does not allocate. Decoding
//! streams over the escaped body and keeps only the channel bytes, so frames
//! of any length are accepted. [`RawFrame`] is the bounded buffer used to
//! hand a frame between tasks.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod channels;
pub mod checksum;
mod error;
pub mod escape;
pub mod frame;

pub use channels::{Channels, CHANNEL_CENTER, CHANNEL_COUNT, MIN_PAYLOAD_LEN, PPM_MAX, PPM_MIN};
pub use error::DecodeError;
pub use escape::{unescape, Unescape, ESCAPE};
pub use frame::{validate, Frame, FRAME_DELIMITER, FRAME_TYPE_RC_CHANNELS};

/// Largest attribute value a notification can carry.
pub const MAX_FRAME_SIZE: usize = 512;

/// One received frame, as handed over by the transport.
pub type RawFrame = heapless::Vec<u8, MAX_FRAME_SIZE>;

/// Decode one raw frame into channel values.
///
/// Stages run in order and the first failure is returned; a frame that fails
/// any stage never yields channels.
///
/// # Errors
///
/// Any [`DecodeError`]; see the individual stages.
pub fn decode_frame(raw: &[u8]) -> Result<Channels, DecodeError> {
    let frame = frame::validate(raw)?;

    let mut head = [0u8; MIN_PAYLOAD_LEN];
    let mut len = 0;
    let mut digest = checksum::Digest::new();
    for byte in escape::unescape(frame.body()) {
        let byte = byte?;
        if let Some(slot) = head.get_mut(len) {
            *slot = byte;
        }
        digest.update(byte);
        len += 1;
    }

    digest.verify(frame.checksum())?;
    channels::decode(&head[..len.min(MIN_PAYLOAD_LEN)])
}

//! Channel-to-gamepad mapping configuration.
//!
//! Decoded channels are signed offsets around center, nominally ±520 with
//! full stick deflection at ±512. This module maps them onto gamepad
//! controls.

use crate::types::{AnalogStick, Buttons, GamepadState};
use rc_frame_proto::Channels;

/// Channel offset treated as full deflection.
pub const STICK_HALF_RANGE: i32 = 512;

/// Channel offsets at or above this press a mapped button.
pub const BUTTON_THRESHOLD: i16 = 0;

/// Channel mapping configuration for channel to gamepad conversion.
///
/// Customize this at compile-time by creating your own const.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMapping {
    pub left_stick_x: usize,
    pub left_stick_y: usize,
    pub right_stick_x: usize,
    pub right_stick_y: usize,
    /// Channel for the left trigger, if any.
    pub left_trigger: Option<usize>,
    /// Channel for the right trigger, if any.
    pub right_trigger: Option<usize>,
    /// Switch channel and the button it drives.
    pub button: Option<(usize, Buttons)>,
    pub invert_left_x: bool,
    pub invert_left_y: bool,
    pub invert_right_x: bool,
    pub invert_right_y: bool,
}

/// Default mapping for the eight-channel handset.
///
/// - CH1 -> Left Stick Y
/// - CH2 -> Left Stick X
/// - CH3 -> Right Stick X
/// - CH4 -> Right Stick Y
/// - CH5 -> Right Trigger
/// - CH6 -> X button (switch)
pub const DEFAULT_MAPPING: ChannelMapping = ChannelMapping {
    left_stick_x: 1,
    left_stick_y: 0,
    right_stick_x: 2,
    right_stick_y: 3,
    left_trigger: None,
    right_trigger: Some(4),
    button: Some((5, Buttons::X)),
    invert_left_x: false,
    invert_left_y: false,
    invert_right_x: false,
    invert_right_y: false,
};

/// Convert a channel offset to a stick axis (-32768 to 32767).
///
/// Center maps to a neutral axis, unlike the half-deflection `(v + 512) / 1024`
/// float scaling some desktop drivers apply.
#[inline]
#[must_use]
pub fn channel_to_stick(offset: i16, invert: bool) -> i16 {
    let scaled = (i32::from(offset) * i32::from(i16::MAX) / STICK_HALF_RANGE)
        .clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
    if invert {
        scaled.saturating_neg()
    } else {
        scaled
    }
}

/// Convert a channel offset to a trigger value (0-255).
#[inline]
#[must_use]
pub fn channel_to_trigger(offset: i16) -> u8 {
    ((i32::from(offset) + STICK_HALF_RANGE) * 255 / (2 * STICK_HALF_RANGE)).clamp(0, 255) as u8
}

/// Check if a switch channel is in its pressed position.
#[inline]
#[must_use]
pub fn channel_to_button(offset: i16) -> bool {
    offset >= BUTTON_THRESHOLD
}

/// Map decoded channels to a GamepadState using the provided mapping.
///
/// Indices past the end of `channels` read as centered.
#[must_use]
pub fn channels_to_gamepad(channels: &Channels, mapping: &ChannelMapping) -> GamepadState {
    let read = |index: usize| channels.get(index).unwrap_or(0);

    let left_stick = AnalogStick {
        x: channel_to_stick(read(mapping.left_stick_x), mapping.invert_left_x),
        y: channel_to_stick(read(mapping.left_stick_y), mapping.invert_left_y),
    };
    let right_stick = AnalogStick {
        x: channel_to_stick(read(mapping.right_stick_x), mapping.invert_right_x),
        y: channel_to_stick(read(mapping.right_stick_y), mapping.invert_right_y),
    };

    let trigger = |index: Option<usize>| index.map_or(0, |i| channel_to_trigger(read(i)));

    let mut buttons = Buttons::NONE;
    if let Some((index, button)) = mapping.button {
        buttons.set(button, channel_to_button(read(index)));
    }

    GamepadState {
        buttons,
        left_stick,
        right_stick,
        left_trigger: trigger(mapping.left_trigger),
        right_trigger: trigger(mapping.right_trigger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_frame_proto::{CHANNEL_CENTER, PPM_MAX, PPM_MIN};

    #[test]
    fn test_channel_to_stick_center() {
        assert_eq!(channel_to_stick(0, false), 0);
    }

    #[test]
    fn test_centered_channels_give_neutral_sticks() {
        let state = channels_to_gamepad(&Channels::CENTERED, &DEFAULT_MAPPING);
        assert_eq!(state.left_stick, AnalogStick::NEUTRAL);
        assert_eq!(state.right_stick, AnalogStick::NEUTRAL);
    }

    #[test]
    fn test_channel_to_stick_full_deflection() {
        assert_eq!(channel_to_stick(512, false), 32767);
        assert_eq!(channel_to_stick(-512, false), -32767);
        assert_eq!(channel_to_stick(256, false), 16383);
    }

    #[test]
    fn test_channel_to_stick_clamps() {
        assert_eq!(channel_to_stick(PPM_MAX - CHANNEL_CENTER, false), i16::MAX);
        assert_eq!(channel_to_stick(PPM_MIN - CHANNEL_CENTER, false), i16::MIN);
        assert_eq!(channel_to_stick(2595, false), i16::MAX);
        assert_eq!(channel_to_stick(-1500, false), i16::MIN);
    }

    #[test]
    fn test_channel_to_stick_invert() {
        assert_eq!(channel_to_stick(512, true), -32767);
        assert_eq!(channel_to_stick(-1500, true), i16::MAX);
    }

    #[test]
    fn test_channel_to_trigger() {
        assert_eq!(channel_to_trigger(-512), 0);
        assert_eq!(channel_to_trigger(0), 127);
        assert_eq!(channel_to_trigger(512), 255);
        assert_eq!(channel_to_trigger(-1500), 0);
        assert_eq!(channel_to_trigger(2595), 255);
    }

    #[test]
    fn test_channel_to_button() {
        assert!(!channel_to_button(-1));
        assert!(!channel_to_button(-520));
        assert!(channel_to_button(0));
        assert!(channel_to_button(520));
    }

    #[test]
    fn test_channels_to_gamepad_default_mapping() {
        let channels = Channels([-512, 512, 256, -256, 512, 10, 0, 0]);
        let state = channels_to_gamepad(&channels, &DEFAULT_MAPPING);
        assert_eq!(state.left_stick, AnalogStick::new(32767, -32767));
        assert_eq!(state.right_stick, AnalogStick::new(16383, -16383));
        assert_eq!(state.right_trigger, 255);
        assert_eq!(state.left_trigger, 0);
        assert_eq!(state.buttons, Buttons::X);
    }

    #[test]
    fn test_channels_to_gamepad_switch_released() {
        let channels = Channels([0, 0, 0, 0, -512, -400, 0, 0]);
        let state = channels_to_gamepad(&channels, &DEFAULT_MAPPING);
        assert!(state.buttons.is_empty());
        assert_eq!(state.right_trigger, 0);
    }

    #[test]
    fn test_channels_to_gamepad_custom_mapping() {
        let mapping = ChannelMapping {
            left_trigger: Some(6),
            right_trigger: None,
            button: Some((7, Buttons::A)),
            invert_left_y: true,
            ..DEFAULT_MAPPING
        };
        let channels = Channels([512, 0, 0, 0, 512, -512, 512, 1]);
        let state = channels_to_gamepad(&channels, &mapping);
        assert_eq!(state.left_stick.y, -32767);
        assert_eq!(state.left_trigger, 255);
        assert_eq!(state.right_trigger, 0);
        assert_eq!(state.buttons, Buttons::A);
    }

    #[test]
    fn test_channels_to_gamepad_out_of_range_index() {
        let mapping = ChannelMapping {
            left_stick_x: 42,
            button: Some((99, Buttons::B)),
            ..DEFAULT_MAPPING
        };
        let state = channels_to_gamepad(&Channels([100; 8]), &mapping);
        assert_eq!(state.left_stick.x, 0);
        // Missing switch channel reads as centered, which counts as pressed.
        assert_eq!(state.buttons, Buttons::B);
    }
}

//! Virtual gamepad state: Buttons, AnalogStick, GamepadState.

use core::ops::{BitOr, BitOrAssign};

/// Pressed buttons as a bitfield.
///
/// ```
/// use gamepad_core::Buttons;
///
/// let mut buttons = Buttons::NONE;
/// buttons.set(Buttons::X, true);
/// assert!(buttons.contains(Buttons::X));
/// assert!(!buttons.contains(Buttons::A | Buttons::X));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u16);

impl Buttons {
    pub const A: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const X: Self = Self(1 << 2);
    pub const Y: Self = Self(1 << 3);
    pub const LB: Self = Self(1 << 4);
    pub const RB: Self = Self(1 << 5);
    pub const BACK: Self = Self(1 << 6);
    pub const START: Self = Self(1 << 7);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// True if every button in `button` is pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Press or release button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Analog stick position, full `i16` range per axis.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogStick {
    pub x: i16,
    pub y: i16,
}

impl AnalogStick {
    pub const NEUTRAL: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Everything a virtual gamepad reports in one update.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadState {
    pub buttons: Buttons,
    pub left_stick: AnalogStick,
    pub right_stick: AnalogStick,
    /// 0 (released) to 255 (fully pulled).
    pub left_trigger: u8,
    /// 0 (released) to 255 (fully pulled).
    pub right_trigger: u8,
}

impl GamepadState {
    /// Sticks centered, triggers released, nothing pressed.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            buttons: Buttons::NONE,
            left_stick: AnalogStick::NEUTRAL,
            right_stick: AnalogStick::NEUTRAL,
            left_trigger: 0,
            right_trigger: 0,
        }
    }
}

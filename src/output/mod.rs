mod gamepad;

pub use gamepad::GamepadOutput;

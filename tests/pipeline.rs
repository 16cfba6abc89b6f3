//! Notification to gamepad, end to end.

use ble_to_gamepad::{
    split, AnalogStick, BridgeError, BridgeStats, Buttons, DecodeError, FrameQueue,
    GamepadBridge, GamepadDevice, GamepadOutput, GamepadState, InputError, InputSource,
    NotifyError, OutputError,
};
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;

/// All eight channels at center.
const CENTERED_FRAME: [u8; 16] = [
    0x7E, 0x80, 0xDC, 0x5D, 0xC5, 0xDC, 0x5D, 0xC5, 0xDC, 0x5D, 0xC5, 0xDC, 0x5D, 0xC5, 0x80,
    0x7E,
];

/// Channel 0 at full deflection (+512), the rest centered. The middle byte
/// of the first group is 0x7D and goes out escaped.
const FULL_THROTTLE_FRAME: [u8; 17] = [
    0x7E, 0x80, 0xDC, 0x7D, 0x5D, 0xC5, 0xDC, 0x5D, 0xC5, 0xDC, 0x5D, 0xC5, 0xDC, 0x5D, 0xC5,
    0xA0, 0x7E,
];

#[derive(Default)]
struct RecordingDevice {
    updates: Vec<GamepadState>,
}

impl GamepadDevice for RecordingDevice {
    fn update(&mut self, state: &GamepadState) -> Result<(), OutputError> {
        self.updates.push(*state);
        Ok(())
    }
}

fn centered_state() -> GamepadState {
    GamepadState {
        buttons: Buttons::X,
        left_stick: AnalogStick::NEUTRAL,
        right_stick: AnalogStick::NEUTRAL,
        left_trigger: 0,
        right_trigger: 127,
    }
}

#[test]
fn test_pipeline_forwards_valid_frames() {
    let queue = FrameQueue::<NoopRawMutex, 4>::new();
    let (handler, source) = split(&queue);
    let mut bridge = GamepadBridge::new(source, GamepadOutput::new(RecordingDevice::default()));

    handler.on_notification(&CENTERED_FRAME).unwrap();
    handler.on_notification(&FULL_THROTTLE_FRAME).unwrap();

    block_on(bridge.process_one()).unwrap();
    block_on(bridge.process_one()).unwrap();

    let throttle = GamepadState {
        left_stick: AnalogStick::new(0, 32767),
        ..centered_state()
    };
    assert_eq!(
        bridge.output().device().updates,
        vec![centered_state(), throttle]
    );
    assert!(bridge.input().is_connected());
}

#[test]
fn test_pipeline_drops_corrupt_frames() {
    let queue = FrameQueue::<NoopRawMutex, 4>::new();
    let (handler, source) = split(&queue);
    let mut bridge = GamepadBridge::new(source, GamepadOutput::new(RecordingDevice::default()));

    let mut corrupted = CENTERED_FRAME;
    corrupted[4] ^= 0x01;
    handler.on_notification(&corrupted).unwrap();
    handler.on_notification(&[0x7E, 0x80, 0x7D]).unwrap();
    handler.on_notification(&CENTERED_FRAME).unwrap();

    assert_eq!(
        block_on(bridge.process_one()),
        Err(BridgeError::Input(InputError::Decode(
            DecodeError::ChecksumMismatch {
                expected: 0x80,
                calculated: 0x81,
            }
        )))
    );
    assert!(bridge.output().device().updates.is_empty());
    assert!(!bridge.input().is_connected());

    assert_eq!(
        block_on(bridge.process_one()),
        Err(BridgeError::Input(InputError::Decode(
            DecodeError::InvalidFraming
        )))
    );
    assert!(bridge.output().device().updates.is_empty());

    block_on(bridge.process_one()).unwrap();
    assert_eq!(bridge.output().device().updates, vec![centered_state()]);
    assert_eq!(bridge.output().state(), &centered_state());

    assert_eq!(
        bridge.stats(),
        BridgeStats {
            forwarded: 1,
            dropped: 2,
            output_errors: 0,
        }
    );
    assert_eq!(bridge.input().frames_received(), 3);
}

#[test]
fn test_pipeline_backpressure() {
    let queue = FrameQueue::<NoopRawMutex, 1>::new();
    let (handler, source) = split(&queue);
    let mut bridge = GamepadBridge::new(source, GamepadOutput::new(RecordingDevice::default()));

    assert_eq!(handler.on_notification(&CENTERED_FRAME), Ok(()));
    assert_eq!(
        handler.on_notification(&FULL_THROTTLE_FRAME),
        Err(NotifyError::QueueFull)
    );

    block_on(bridge.process_one()).unwrap();
    assert_eq!(handler.on_notification(&FULL_THROTTLE_FRAME), Ok(()));
    block_on(bridge.process_one()).unwrap();

    let (_, output) = bridge.into_parts();
    assert_eq!(output.into_inner().updates.len(), 2);
}

use gamepad_core::{
    channels_to_gamepad, ChannelMapping, GamepadDevice, GamepadState, OutputError, OutputSink,
    DEFAULT_MAPPING,
};
use rc_frame_proto::Channels;

/// Output sink that drives a virtual gamepad.
///
/// Each decoded channel vector is mapped through a [`ChannelMapping`] and the
/// resulting [`GamepadState`] is pushed to the device in a single update.
/// The sink is the only owner of the device, so updates are serialized by
/// `&mut self`.
pub struct GamepadOutput<D> {
    device: D,
    mapping: ChannelMapping,
    /// Last state the device accepted.
    state: GamepadState,
}

impl<D: GamepadDevice> GamepadOutput<D> {
    /// Create an output with the default channel mapping.
    #[must_use]
    pub fn new(device: D) -> Self {
        Self::with_mapping(device, DEFAULT_MAPPING)
    }

    /// Create an output with a custom channel mapping.
    #[must_use]
    pub fn with_mapping(device: D, mapping: ChannelMapping) -> Self {
        Self {
            device,
            mapping,
            state: GamepadState::neutral(),
        }
    }

    /// Last state the device accepted.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &GamepadState {
        &self.state
    }

    pub fn mapping(&self) -> &ChannelMapping {
        &self.mapping
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D: GamepadDevice> OutputSink for GamepadOutput<D> {
    async fn send(&mut self, channels: &Channels) -> Result<(), OutputError> {
        let state = channels_to_gamepad(channels, &self.mapping);
        self.device.update(&state)?;
        self.state = state;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.device.is_ready()
    }
}

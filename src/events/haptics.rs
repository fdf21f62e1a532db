use bevy_ecs::message::Message;

use crate::resources::input::Handedness;

/// Request for a single haptic pulse on one controller.
///
/// Written by panel systems, forwarded to the host through
/// [`HapticBridge`](crate::resources::haptics::HapticBridge). No
/// acknowledgement is expected.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct HapticPulse {
    pub hand: Handedness,
    /// Actuator strength in [0, 1].
    pub intensity: f32,
    pub duration_ms: u32,
}

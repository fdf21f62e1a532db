//! Haptics forwarding systems.
//!
//! - [`forward_haptic_pulses`] sends this frame's [`HapticPulse`] messages to
//!   the host through the [`HapticBridge`] channel
//! - [`update_haptic_messages`] advances the message queue; run it after
//!   forwarding
//!
//! Without a bridge the pulses are read and dropped.

use bevy_ecs::prelude::*;

use crate::events::haptics::HapticPulse;
use crate::resources::haptics::HapticBridge;

pub fn forward_haptic_pulses(
    bridge: Option<Res<HapticBridge>>,
    mut reader: MessageReader<HapticPulse>,
) {
    for pulse in reader.read() {
        if let Some(bridge) = &bridge {
            // Host may have dropped the receiver; pulses are fire-and-forget.
            let _ = bridge.tx.send(*pulse);
        }
    }
}

pub fn update_haptic_messages(mut msgs: ResMut<Messages<HapticPulse>>) {
    msgs.update();
}

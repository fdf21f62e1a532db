//! ECS resources that bridge the world with the host's haptics device.
//!
//! Use [`setup_haptics`] once during initialization; it returns the receiver
//! end the host drains to drive its actuators. Pulses are fire-and-forget:
//! nothing is sent back.

use crate::events::haptics::HapticPulse;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Sender side of the haptics channel.
///
/// [`forward_haptic_pulses`](crate::systems::haptics::forward_haptic_pulses)
/// pushes every [`HapticPulse`] message written this frame through it.
#[derive(Resource)]
pub struct HapticBridge {
    pub tx: Sender<HapticPulse>,
}

/// Create the haptics channel and register the bridge resources.
///
/// Inserts [`HapticBridge`] and makes sure `Messages<HapticPulse>` exists.
pub fn setup_haptics(world: &mut World) -> Receiver<HapticPulse> {
    let (tx, rx) = unbounded::<HapticPulse>();
    world.insert_resource(HapticBridge { tx });
    world.init_resource::<Messages<HapticPulse>>();
    rx
}

/// Drop the bridge; the host's receiver then observes disconnection.
pub fn shutdown_haptics(world: &mut World) {
    world.remove_resource::<HapticBridge>();
}

//! Input ingestion.
//!
//! - [`update_input_state`] copies the host's [`InputFrame`] for this frame
//!   into [`XrInputState`] and derives the button edge flags.
//!
//! The host (WebXR bridge, test harness, replay script) owns sampling; this
//! crate never polls a device itself.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::input::{ControllerState, StickSample, XrInputState};

/// Raw state of one controller for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerSample {
    #[serde(default)]
    pub thumbstick: StickSample,
    #[serde(default)]
    pub trigger: bool,
    #[serde(default)]
    pub thumbstick_button: bool,
}

impl ControllerSample {
    pub fn stick(x: f32, y: f32) -> Self {
        Self {
            thumbstick: StickSample::new(x, y),
            ..Self::default()
        }
    }

    pub fn with_trigger(mut self) -> Self {
        self.trigger = true;
        self
    }

    pub fn with_thumbstick_button(mut self) -> Self {
        self.thumbstick_button = true;
        self
    }
}

/// Everything the host sampled this frame. A missing hand means that
/// controller is not tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    #[serde(default)]
    pub left: Option<ControllerSample>,
    #[serde(default)]
    pub right: Option<ControllerSample>,
}

impl InputFrame {
    pub fn left(sample: ControllerSample) -> Self {
        Self {
            left: Some(sample),
            right: None,
        }
    }

    pub fn right(sample: ControllerSample) -> Self {
        Self {
            left: None,
            right: Some(sample),
        }
    }

    pub fn both(left: ControllerSample, right: ControllerSample) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }
}

/// Apply one frame of host input to the `XrInputState` resource.
pub fn update_input_state(world: &mut World, frame: &InputFrame) {
    let mut input = world.resource_mut::<XrInputState>();
    let input = &mut *input;
    apply_controller(&mut input.left, frame.left);
    apply_controller(&mut input.right, frame.right);
    input.frame += 1;
}

fn apply_controller(state: &mut ControllerState, sample: Option<ControllerSample>) {
    match sample {
        Some(sample) => {
            state.connected = true;
            state.thumbstick = sample.thumbstick;
            state.trigger.update(sample.trigger);
            state.thumbstick_button.update(sample.thumbstick_button);
        }
        None => {
            // Untracked controllers read as released and centred.
            state.connected = false;
            state.thumbstick = StickSample::NEUTRAL;
            state.trigger.update(false);
            state.thumbstick_button.update(false);
        }
    }
}

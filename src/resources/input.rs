//! Per-frame XR controller input resource.
//!
//! Captures the subset of controller state the panels care about and exposes
//! it to systems via the [`XrInputState`] resource. The host writes a fresh
//! [`InputFrame`](crate::systems::input::InputFrame) every frame through
//! [`update_input_state`](crate::systems::input::update_input_state).
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Which hand a controller (or a panel binding) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    #[default]
    Left,
    Right,
}

impl Handedness {
    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left => "left",
            Handedness::Right => "right",
        }
    }
}

impl std::str::FromStr for Handedness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Handedness::Left),
            "right" | "r" => Ok(Handedness::Right),
            other => Err(format!("Unknown hand '{}', expected left or right", other)),
        }
    }
}

/// 2D thumbstick deflection. Both axes lie in [-1, 1]; `y` grows when the
/// stick is pushed forward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickSample {
    pub x: f32,
    pub y: f32,
}

impl StickSample {
    pub const NEUTRAL: StickSample = StickSample { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state with edge flags.
pub struct BoolState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button was pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Advance one frame with the new raw button level.
    pub fn update(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.active;
        self.just_released = !pressed && self.active;
        self.active = pressed;
    }
}

/// State of one tracked controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerState {
    /// A controller is tracked for this hand this frame.
    pub connected: bool,
    pub thumbstick: StickSample,
    /// Select/trigger button, used to activate the highlighted item.
    pub trigger: BoolState,
    /// Thumbstick click, used to show or hide the settings panel.
    pub thumbstick_button: BoolState,
}

/// Resource capturing the per-frame state of both controllers.
#[derive(Resource, Debug, Clone, Default)]
pub struct XrInputState {
    pub left: ControllerState,
    pub right: ControllerState,
    /// Frames ingested since startup.
    pub frame: u64,
}

impl XrInputState {
    pub fn controller(&self, hand: Handedness) -> &ControllerState {
        match hand {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    /// Hand whose stick drives shared panels: the right stick when it is
    /// deflected at all, the left otherwise.
    pub fn active_stick_hand(&self) -> Handedness {
        if self.right.connected && self.right.thumbstick.magnitude() > 0.0 {
            Handedness::Right
        } else {
            Handedness::Left
        }
    }
}

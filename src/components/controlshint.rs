use bevy_ecs::prelude::Component;

use crate::resources::input::Handedness;

/// Button legend attached to a controller, shown while a setting allows it.
///
/// Visible when the controller is tracked and the setting `key` holds
/// `shown_when` (e.g. `tips = On`).
#[derive(Component, Clone, Debug)]
pub struct ControlsHint {
    pub hand: Handedness,
    pub key: String,
    pub shown_when: String,
    pub visible: bool,
}

impl ControlsHint {
    pub fn new(hand: Handedness, key: impl Into<String>, shown_when: impl Into<String>) -> Self {
        Self {
            hand,
            key: key.into(),
            shown_when: shown_when.into(),
            visible: false,
        }
    }

    /// Tips legend driven by the `tips` setting.
    pub fn tips(hand: Handedness) -> Self {
        Self::new(hand, "tips", "On")
    }
}

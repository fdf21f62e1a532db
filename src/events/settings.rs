//! Setting value change event and the observer that persists it.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::settingsstore::SettingsStore;

/// A settings panel changed the value of `key`.
#[derive(Event, Debug, Clone)]
pub struct SettingChangedEvent {
    pub panel: Entity,
    pub key: String,
    pub value: String,
}

/// Write the new value into [`SettingsStore`].
pub fn setting_changed_observer(trigger: On<SettingChangedEvent>, mut store: ResMut<SettingsStore>) {
    let event = trigger.event();
    log::info!("Setting '{}' -> '{}'", event.key, event.value);
    store.set(event.key.clone(), event.value.clone());
}

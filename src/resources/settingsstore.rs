//! Settings value store.
//!
//! [`SettingsStore`] holds the current value of each user-facing setting
//! (e.g. `unit = Metric`). The settings panel writes it through
//! [`SettingChangedEvent`](crate::events::settings::SettingChangedEvent);
//! any system may read it.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, Resource)]
pub struct SettingsStore {
    pub values: FxHashMap<String, String>,
}

impl SettingsStore {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
    /// `true` when `key` currently holds exactly `value`.
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }
}

//! Navigation configuration resource.
//!
//! Manages tuning values loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [navigation]
//! threshold = 0.7
//! items_per_row = 4
//!
//! [haptics]
//! category_intensity = 0.2
//! category_duration_ms = 100
//! value_intensity = 0.3
//! value_duration_ms = 50
//!
//! [settings]
//! outline_jitter = 0.01
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::direction::DEFAULT_THRESHOLD;

/// Default safe values for startup
const DEFAULT_ITEMS_PER_ROW: usize = 4;
const DEFAULT_CATEGORY_INTENSITY: f32 = 0.2;
const DEFAULT_CATEGORY_DURATION_MS: u32 = 100;
const DEFAULT_VALUE_INTENSITY: f32 = 0.3;
const DEFAULT_VALUE_DURATION_MS: u32 = 50;
const DEFAULT_OUTLINE_JITTER: f32 = 0.01;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Navigation configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct NavConfig {
    /// Stick magnitude a push must exceed to be classified.
    pub threshold: f32,
    /// Catalog items per grid row.
    pub items_per_row: usize,
    /// Haptic pulse on settings category change.
    pub category_intensity: f32,
    pub category_duration_ms: u32,
    /// Haptic pulse on settings value change.
    pub value_intensity: f32,
    pub value_duration_ms: u32,
    /// Scale applied to the raw stick to wobble the settings outline.
    pub outline_jitter: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NavConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            items_per_row: DEFAULT_ITEMS_PER_ROW,
            category_intensity: DEFAULT_CATEGORY_INTENSITY,
            category_duration_ms: DEFAULT_CATEGORY_DURATION_MS,
            value_intensity: DEFAULT_VALUE_INTENSITY,
            value_duration_ms: DEFAULT_VALUE_DURATION_MS,
            outline_jitter: DEFAULT_OUTLINE_JITTER,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Out of range
    /// values are ignored.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [navigation] section
        if let Some(threshold) = config.getfloat("navigation", "threshold").ok().flatten() {
            if (0.0..1.0).contains(&threshold) {
                self.threshold = threshold as f32;
            }
        }
        if let Some(per_row) = config.getuint("navigation", "items_per_row").ok().flatten() {
            if per_row > 0 {
                self.items_per_row = per_row as usize;
            }
        }

        // [haptics] section
        if let Some(v) = config.getfloat("haptics", "category_intensity").ok().flatten() {
            self.category_intensity = v.clamp(0.0, 1.0) as f32;
        }
        if let Some(v) = config.getuint("haptics", "category_duration_ms").ok().flatten() {
            if let Ok(ms) = u32::try_from(v) {
                self.category_duration_ms = ms;
            }
        }
        if let Some(v) = config.getfloat("haptics", "value_intensity").ok().flatten() {
            self.value_intensity = v.clamp(0.0, 1.0) as f32;
        }
        if let Some(v) = config.getuint("haptics", "value_duration_ms").ok().flatten() {
            if let Ok(ms) = u32::try_from(v) {
                self.value_duration_ms = ms;
            }
        }

        // [settings] section
        if let Some(v) = config.getfloat("settings", "outline_jitter").ok().flatten() {
            self.outline_jitter = v as f32;
        }

        info!(
            "Loaded config: threshold={}, items_per_row={}, haptics=({}, {}ms)/({}, {}ms), jitter={}",
            self.threshold,
            self.items_per_row,
            self.category_intensity,
            self.category_duration_ms,
            self.value_intensity,
            self.value_duration_ms,
            self.outline_jitter
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("navigation", "threshold", Some(self.threshold.to_string()));
        config.set(
            "navigation",
            "items_per_row",
            Some(self.items_per_row.to_string()),
        );

        config.set(
            "haptics",
            "category_intensity",
            Some(self.category_intensity.to_string()),
        );
        config.set(
            "haptics",
            "category_duration_ms",
            Some(self.category_duration_ms.to_string()),
        );
        config.set(
            "haptics",
            "value_intensity",
            Some(self.value_intensity.to_string()),
        );
        config.set(
            "haptics",
            "value_duration_ms",
            Some(self.value_duration_ms.to_string()),
        );

        config.set(
            "settings",
            "outline_jitter",
            Some(self.outline_jitter.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

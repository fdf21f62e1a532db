//! Option cycler component for settings screens.
//!
//! Up/Down cycle through categories, Left/Right cycle the value of the
//! active category. Both wrap around at either end.

use bevy_ecs::prelude::Component;

use crate::direction::Direction;
use crate::resources::settingsstore::SettingsStore;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionCategory {
    pub key: String,
    pub options: Vec<String>,
    pub selected: usize,
}

impl OptionCategory {
    pub fn new(key: impl Into<String>, options: &[&str]) -> Self {
        Self {
            key: key.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            selected: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.options[self.selected]
    }
}

/// What a successful [`OptionCycler::navigate`] changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleChange {
    Category { from: usize, to: usize },
    Value { key: String, value: String },
}

#[derive(Component, Clone, Debug)]
pub struct OptionCycler {
    categories: Vec<OptionCategory>,
    active: usize,
    /// Whether the panel is shown. Hidden panels ignore stick input.
    pub visible: bool,
    /// Small offset following the raw stick, used to wobble the outline.
    pub outline_offset: (f32, f32),
}

impl OptionCycler {
    /// # Panics
    ///
    /// Panics if there are no categories or a category has no options.
    pub fn new(categories: Vec<OptionCategory>) -> Self {
        assert!(!categories.is_empty(), "OptionCycler needs at least one category");
        for category in &categories {
            assert!(
                !category.options.is_empty(),
                "OptionCycler category '{}' has no options",
                category.key
            );
            assert!(
                category.selected < category.options.len(),
                "OptionCycler category '{}' starts out of range",
                category.key
            );
        }
        Self {
            categories,
            active: 0,
            visible: true,
            outline_offset: (0.0, 0.0),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn categories(&self) -> &[OptionCategory] {
        &self.categories
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &OptionCategory {
        &self.categories[self.active]
    }

    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(OptionCategory::value)
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<CycleChange> {
        let n = self.categories.len();
        match direction {
            Direction::Up | Direction::Down => {
                let from = self.active;
                self.active = if direction == Direction::Up {
                    (from + n - 1) % n
                } else {
                    (from + 1) % n
                };
                Some(CycleChange::Category {
                    from,
                    to: self.active,
                })
            }
            Direction::Left | Direction::Right => {
                let category = &mut self.categories[self.active];
                let count = category.options.len();
                category.selected = if direction == Direction::Left {
                    (category.selected + count - 1) % count
                } else {
                    (category.selected + 1) % count
                };
                Some(CycleChange::Value {
                    key: category.key.clone(),
                    value: category.value().to_string(),
                })
            }
            Direction::None => None,
        }
    }

    /// Like [`navigate`](Self::navigate), but a value step starts from the
    /// value held in `store` for the active category, so a value written
    /// elsewhere is not overwritten by a stale one.
    pub fn navigate_with_store(
        &mut self,
        direction: Direction,
        store: &SettingsStore,
    ) -> Option<CycleChange> {
        if matches!(direction, Direction::Left | Direction::Right) {
            let category = &mut self.categories[self.active];
            if let Some(idx) = store
                .get(&category.key)
                .and_then(|stored| category.options.iter().position(|o| o == stored))
            {
                category.selected = idx;
            }
        }
        self.navigate(direction)
    }

    /// Write each category's current value into `store` unless the store
    /// already has one; in that case adopt the stored value when it is one
    /// of the category's options.
    pub fn sync_with_store(&mut self, store: &mut SettingsStore) {
        for category in &mut self.categories {
            match store.get(&category.key) {
                Some(stored) => {
                    if let Some(idx) = category.options.iter().position(|o| o == stored) {
                        category.selected = idx;
                    } else {
                        log::warn!(
                            "Stored value '{}' for '{}' is not an option, keeping '{}'",
                            stored,
                            category.key,
                            category.value()
                        );
                        store.set(category.key.clone(), category.value());
                    }
                }
                None => store.set(category.key.clone(), category.value()),
            }
        }
    }
}

/// Settings used by the measuring tool.
pub fn measurement_settings() -> OptionCycler {
    OptionCycler::new(vec![
        OptionCategory::new("unit", &["Metric", "Imperial"]),
        OptionCategory::new("mode", &["Tape", "Clamp"]),
        OptionCategory::new("tips", &["On", "Off"]),
    ])
}

//! Settings panel systems.
//!
//! - [`settings_store_seed_system`] – syncs newly added [`OptionCycler`]s with
//!   the [`SettingsStore`]
//! - [`settings_toggle_system`] – shows/hides settings panels on a thumbstick
//!   click from either hand
//! - [`settings_navigation_system`] – cycles categories and values, pulses
//!   haptics and triggers [`SettingChangedEvent`]
//! - [`controls_hint_system`] – shows controller legends while the matching
//!   setting allows it

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::controlshint::ControlsHint;
use crate::components::optioncycler::{CycleChange, OptionCycler};
use crate::components::sticknavigator::StickNavigator;
use crate::events::haptics::HapticPulse;
use crate::events::settings::SettingChangedEvent;
use crate::resources::input::XrInputState;
use crate::resources::navconfig::NavConfig;
use crate::resources::settingsstore::SettingsStore;

pub fn settings_store_seed_system(
    mut query: Query<&mut OptionCycler, Added<OptionCycler>>,
    mut store: ResMut<SettingsStore>,
) {
    for mut cycler in query.iter_mut() {
        cycler.sync_with_store(&mut store);
    }
}

pub fn settings_toggle_system(input: Res<XrInputState>, mut query: Query<&mut OptionCycler>) {
    if !(input.left.thumbstick_button.just_pressed || input.right.thumbstick_button.just_pressed) {
        return;
    }
    for mut cycler in query.iter_mut() {
        cycler.visible = !cycler.visible;
        info!(
            "Settings panel {}",
            if cycler.visible { "shown" } else { "hidden" }
        );
    }
}

/// Drive visible settings panels from the thumbstick.
///
/// Hidden panels are skipped entirely, their debounce state included.
/// Value steps start from the [`SettingsStore`], not the panel's own copy.
pub fn settings_navigation_system(
    input: Res<XrInputState>,
    config: Res<NavConfig>,
    store: Res<SettingsStore>,
    mut query: Query<(Entity, &mut OptionCycler, &mut StickNavigator)>,
    mut haptics: MessageWriter<HapticPulse>,
    mut commands: Commands,
) {
    for (entity, mut cycler, mut navigator) in query.iter_mut() {
        if !cycler.visible {
            continue;
        }
        let hand = navigator.binding.resolve(&input);
        let stick = input.controller(hand).thumbstick;
        cycler.outline_offset = (stick.x * config.outline_jitter, stick.y * config.outline_jitter);

        let Some(direction) = navigator.poll(stick) else {
            continue;
        };
        match cycler.navigate_with_store(direction, &store) {
            Some(CycleChange::Category { from, to }) => {
                debug!(
                    "Settings {:?}: category {} -> {} ('{}')",
                    entity,
                    from,
                    to,
                    cycler.active().key
                );
                haptics.write(HapticPulse {
                    hand,
                    intensity: config.category_intensity,
                    duration_ms: config.category_duration_ms,
                });
            }
            Some(CycleChange::Value { key, value }) => {
                haptics.write(HapticPulse {
                    hand,
                    intensity: config.value_intensity,
                    duration_ms: config.value_duration_ms,
                });
                commands.trigger(SettingChangedEvent {
                    panel: entity,
                    key,
                    value,
                });
            }
            None => {}
        }
    }
}

pub fn controls_hint_system(
    input: Res<XrInputState>,
    store: Res<SettingsStore>,
    mut query: Query<&mut ControlsHint>,
) {
    for mut hint in query.iter_mut() {
        let visible =
            input.controller(hint.hand).connected && store.is(&hint.key, &hint.shown_when);
        if hint.visible != visible {
            hint.visible = visible;
        }
    }
}

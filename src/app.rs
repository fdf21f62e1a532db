//! World and schedule assembly.
//!
//! [`build_world`] inserts the resources and observers every panel needs,
//! [`build_schedule`] wires the per-frame systems in order, and
//! [`run_frame`] advances one frame with the host's input. The spawn helpers
//! create the two stock panels (a catalog grid and the measurement settings)
//! and the controller tips legends.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;

use crate::components::controlshint::ControlsHint;
use crate::components::gridpanel::GridPanel;
use crate::components::optioncycler::OptionCycler;
use crate::components::sticknavigator::{StickBinding, StickNavigator};
use crate::events::haptics::HapticPulse;
use crate::events::selection::item_activated_observer;
use crate::events::settings::setting_changed_observer;
use crate::resources::catalog::Catalog;
use crate::resources::input::{Handedness, XrInputState};
use crate::resources::navconfig::NavConfig;
use crate::resources::pendingspawn::PendingSpawn;
use crate::resources::settingsstore::SettingsStore;
use crate::systems::gridpanel::{grid_panel_activation_system, grid_panel_navigation_system};
use crate::systems::haptics::{forward_haptic_pulses, update_haptic_messages};
use crate::systems::input::{InputFrame, update_input_state};
use crate::systems::settings::{
    controls_hint_system, settings_navigation_system, settings_store_seed_system,
    settings_toggle_system,
};

pub fn build_world(config: NavConfig) -> World {
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(XrInputState::default());
    world.insert_resource(SettingsStore::default());
    world.insert_resource(PendingSpawn::default());
    world.init_resource::<Messages<HapticPulse>>();

    world.spawn(Observer::new(item_activated_observer));
    world.spawn(Observer::new(setting_changed_observer));
    // Observers must exist before any system triggers events.
    world.flush();
    world
}

pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            settings_store_seed_system,
            settings_toggle_system,
            settings_navigation_system,
            // After navigation so a tips change applies on the same frame
            controls_hint_system,
        )
            .chain(),
    );
    update.add_systems((grid_panel_navigation_system, grid_panel_activation_system).chain());
    update.add_systems(
        // haptics systems must be together
        (forward_haptic_pulses, update_haptic_messages)
            .chain()
            .after(settings_navigation_system),
    );
    update
}

/// Feed one frame of host input and run the schedule.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, frame: &InputFrame) {
    update_input_state(world, frame);
    schedule.run(world);
}

/// Spawn a grid panel listing `catalog`, driven by `hand`.
pub fn spawn_catalog_panel(world: &mut World, catalog: &Catalog, hand: Handedness) -> Entity {
    let (threshold, per_row) = {
        let config = world.resource::<NavConfig>();
        (config.threshold, config.items_per_row)
    };
    let panel = GridPanel::from_items(catalog.to_grid_items(), per_row);
    log::info!(
        "Catalog panel: {} items in {} rows, bound to {} hand",
        catalog.entries.len(),
        panel.row_count(),
        hand.as_str()
    );
    world
        .spawn((
            panel,
            StickNavigator::new(StickBinding::Hand(hand), threshold),
        ))
        .id()
}

/// Spawn a settings panel driven by whichever stick is in use.
pub fn spawn_settings_panel(world: &mut World, cycler: OptionCycler) -> Entity {
    let threshold = world.resource::<NavConfig>().threshold;
    world
        .spawn((
            cycler,
            StickNavigator::new(StickBinding::ActiveStick, threshold),
        ))
        .id()
}

/// Spawn the tips legend for each controller. Call once per world; the
/// legends follow the store, not any particular settings panel.
pub fn spawn_controls_hints(world: &mut World) -> [Entity; 2] {
    [
        world.spawn(ControlsHint::tips(Handedness::Left)).id(),
        world.spawn(ControlsHint::tips(Handedness::Right)).id(),
    ]
}

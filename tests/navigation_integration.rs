//! Frame-by-frame integration tests for the panel systems.
//!
//! Each test builds a world with [`build_world`], spawns panels, and feeds
//! [`InputFrame`]s through [`run_frame`], checking cursors, the settings
//! store, pending spawns, and haptic output.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use std::sync::{Arc, Mutex};

use xrnav::app::{
    build_schedule, build_world, run_frame, spawn_catalog_panel, spawn_controls_hints,
    spawn_settings_panel,
};
use xrnav::components::controlshint::ControlsHint;
use xrnav::components::gridpanel::{GridCursor, GridPanel};
use xrnav::components::optioncycler::{OptionCycler, measurement_settings};
use xrnav::events::haptics::HapticPulse;
use xrnav::events::selection::SelectionMovedEvent;
use xrnav::replay::{InputScript, InputSource, RandomInput, ScriptedInput};
use xrnav::resources::catalog::{Catalog, CatalogEntry};
use xrnav::resources::haptics::setup_haptics;
use xrnav::resources::input::Handedness;
use xrnav::resources::navconfig::NavConfig;
use xrnav::resources::pendingspawn::PendingSpawn;
use xrnav::resources::settingsstore::SettingsStore;
use xrnav::systems::input::{ControllerSample, InputFrame};

fn catalog(n: usize) -> Catalog {
    Catalog {
        entries: (0..n)
            .map(|i| CatalogEntry {
                item_id: format!("item{}", i),
                image_path: format!("item{}.png", i),
                model_id: format!("models/item{}.glb", i),
            })
            .collect(),
    }
}

fn config(per_row: usize) -> NavConfig {
    let mut config = NavConfig::new();
    config.items_per_row = per_row;
    config
}

struct Harness {
    world: World,
    schedule: Schedule,
    haptics: Receiver<HapticPulse>,
}

impl Harness {
    fn new(config: NavConfig) -> Self {
        let mut world = build_world(config);
        let haptics = setup_haptics(&mut world);
        Self {
            world,
            schedule: build_schedule(),
            haptics,
        }
    }

    fn tick(&mut self, frame: InputFrame) {
        run_frame(&mut self.world, &mut self.schedule, &frame);
    }

    fn tick_n(&mut self, frame: InputFrame, n: usize) {
        for _ in 0..n {
            self.tick(frame);
        }
    }

    fn left_stick(&mut self, x: f32, y: f32, n: usize) {
        self.tick_n(InputFrame::left(ControllerSample::stick(x, y)), n);
    }

    fn release_left(&mut self) {
        self.tick(InputFrame::left(ControllerSample::default()));
    }

    fn cursor(&self, panel: Entity) -> GridCursor {
        self.world.get::<GridPanel>(panel).unwrap().cursor()
    }

    fn pulses(&self) -> Vec<HapticPulse> {
        self.haptics.try_iter().collect()
    }
}

// =============================================================================
// Catalog grid panel
// =============================================================================

#[test]
fn held_stick_moves_cursor_once() {
    let mut h = Harness::new(config(4));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Left);

    h.left_stick(1.0, 0.0, 30);
    assert_eq!(h.cursor(panel), GridCursor::new(0, 1));
}

#[test]
fn release_and_push_again_moves_twice() {
    let mut h = Harness::new(config(4));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Left);

    h.left_stick(1.0, 0.0, 3);
    h.release_left();
    h.left_stick(1.0, 0.0, 3);
    assert_eq!(h.cursor(panel), GridCursor::new(0, 2));
}

#[test]
fn other_hand_does_not_drive_panel() {
    let mut h = Harness::new(config(4));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Left);

    h.tick_n(InputFrame::right(ControllerSample::stick(1.0, 0.0)), 3);
    assert_eq!(h.cursor(panel), GridCursor::new(0, 0));
}

#[test]
fn ragged_grid_rejects_down_into_short_row() {
    // 2 rows x [3, 2] columns
    let mut h = Harness::new(config(3));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(5), Handedness::Left);

    h.left_stick(1.0, 0.0, 1);
    h.release_left();
    h.left_stick(1.0, 0.0, 1);
    h.release_left();
    assert_eq!(h.cursor(panel), GridCursor::new(0, 2));

    h.left_stick(0.0, -1.0, 1);
    assert_eq!(h.cursor(panel), GridCursor::new(0, 2));

    let grid = h.world.get::<GridPanel>(panel).unwrap();
    let lit: Vec<_> = grid
        .rows()
        .iter()
        .flatten()
        .filter(|item| item.highlighted)
        .map(|item| item.id.clone())
        .collect();
    assert_eq!(lit, vec!["item2".to_string()]);
}

#[test]
fn out_of_bounds_push_is_consumed_by_debounce() {
    let mut h = Harness::new(config(4));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Left);

    // Up from row 0 is rejected; holding Up must not retry it, and switching
    // to Down fires immediately.
    h.left_stick(0.0, 1.0, 5);
    assert_eq!(h.cursor(panel), GridCursor::new(0, 0));
    h.left_stick(0.0, -1.0, 5);
    assert_eq!(h.cursor(panel), GridCursor::new(1, 0));
}

#[test]
fn accepted_moves_trigger_selection_moved() {
    let mut h = Harness::new(config(4));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Left);

    let moves = Arc::new(Mutex::new(Vec::new()));
    let moves_clone = moves.clone();
    h.world.add_observer(move |trigger: On<SelectionMovedEvent>| {
        let event = trigger.event();
        moves_clone.lock().unwrap().push((event.from, event.to));
    });
    h.world.flush();

    h.left_stick(0.0, 1.0, 2); // rejected
    h.release_left();
    h.left_stick(0.0, -1.0, 2);
    h.release_left();
    h.left_stick(-1.0, 0.0, 2); // rejected

    assert_eq!(h.cursor(panel), GridCursor::new(1, 0));
    assert_eq!(
        *moves.lock().unwrap(),
        vec![(GridCursor::new(0, 0), GridCursor::new(1, 0))]
    );
}

#[test]
fn trigger_queues_selected_payload() {
    let mut h = Harness::new(config(4));
    spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Left);

    h.left_stick(0.0, -1.0, 1);
    h.release_left();
    h.tick(InputFrame::left(ControllerSample::default().with_trigger()));

    let model = h.world.resource_mut::<PendingSpawn>().take();
    assert_eq!(model.as_deref(), Some("models/item4.glb"));

    // Holding the trigger does not re-queue.
    h.tick(InputFrame::left(ControllerSample::default().with_trigger()));
    assert!(h.world.resource::<PendingSpawn>().model.is_none());
}

#[test]
fn push_and_trigger_same_frame_activates_new_item() {
    let mut h = Harness::new(config(4));
    spawn_catalog_panel(&mut h.world, &catalog(8), Handedness::Right);

    h.tick(InputFrame::right(ControllerSample::stick(1.0, 0.0).with_trigger()));
    assert_eq!(
        h.world.resource::<PendingSpawn>().model.as_deref(),
        Some("models/item1.glb")
    );
}

#[test]
fn random_input_keeps_exactly_one_highlight() {
    let mut h = Harness::new(config(3));
    let panel = spawn_catalog_panel(&mut h.world, &catalog(7), Handedness::Left);

    let mut source = RandomInput::new(1234, 2000);
    while let Some(frame) = source.next_frame() {
        h.tick(frame);
        let grid = h.world.get::<GridPanel>(panel).unwrap();
        let cursor = grid.cursor();
        assert!(grid.contains(cursor));
        let lit = grid.rows().iter().flatten().filter(|i| i.highlighted).count();
        assert_eq!(lit, 1);
        assert!(grid.item(cursor).unwrap().highlighted);
    }
}

// =============================================================================
// Settings panel
// =============================================================================

fn settings_harness() -> (Harness, Entity) {
    let mut h = Harness::new(NavConfig::new());
    let panel = spawn_settings_panel(&mut h.world, measurement_settings());
    spawn_controls_hints(&mut h.world);
    (h, panel)
}

fn both_neutral() -> InputFrame {
    InputFrame::both(ControllerSample::default(), ControllerSample::default())
}

#[test]
fn settings_store_seeded_with_first_options() {
    let (mut h, _) = settings_harness();
    h.tick(both_neutral());

    let store = h.world.resource::<SettingsStore>();
    assert_eq!(store.get("unit"), Some("Metric"));
    assert_eq!(store.get("mode"), Some("Tape"));
    assert_eq!(store.get("tips"), Some("On"));
}

#[test]
fn up_from_first_category_wraps_with_category_pulse() {
    let (mut h, panel) = settings_harness();
    h.tick(both_neutral());
    h.tick_n(
        InputFrame::both(ControllerSample::default(), ControllerSample::stick(0.0, 1.0)),
        4,
    );

    let cycler = h.world.get::<OptionCycler>(panel).unwrap();
    assert_eq!(cycler.active().key, "tips");
    assert_eq!(
        h.pulses(),
        vec![HapticPulse {
            hand: Handedness::Right,
            intensity: 0.2,
            duration_ms: 100,
        }]
    );
}

#[test]
fn left_wraps_value_and_updates_store() {
    let (mut h, panel) = settings_harness();
    h.tick(both_neutral());
    h.tick(InputFrame::left(ControllerSample::stick(-1.0, 0.0)));

    assert_eq!(
        h.world.get::<OptionCycler>(panel).unwrap().value_of("unit"),
        Some("Imperial")
    );
    assert_eq!(h.world.resource::<SettingsStore>().get("unit"), Some("Imperial"));
    let pulses = h.pulses();
    assert_eq!(pulses.len(), 1);
    assert_eq!(pulses[0].hand, Handedness::Left);
    assert_eq!(pulses[0].duration_ms, 50);
}

#[test]
fn value_push_starts_from_store_written_elsewhere() {
    let (mut h, panel) = settings_harness();
    h.tick(both_neutral());

    h.world.resource_mut::<SettingsStore>().set("unit", "Imperial");
    h.tick(both_neutral());
    h.tick(InputFrame::left(ControllerSample::stick(1.0, 0.0)));

    assert_eq!(h.world.resource::<SettingsStore>().get("unit"), Some("Metric"));
    assert_eq!(
        h.world.get::<OptionCycler>(panel).unwrap().value_of("unit"),
        Some("Metric")
    );
}

#[test]
fn hidden_settings_ignore_stick_and_click_toggles() {
    let mut h = Harness::new(NavConfig::new());
    let panel = spawn_settings_panel(&mut h.world, measurement_settings().hidden());
    h.tick(both_neutral());

    h.tick(InputFrame::left(ControllerSample::stick(1.0, 0.0)));
    assert_eq!(h.world.resource::<SettingsStore>().get("unit"), Some("Metric"));
    assert!(h.pulses().is_empty());

    h.tick(InputFrame::left(ControllerSample::default().with_thumbstick_button()));
    assert!(h.world.get::<OptionCycler>(panel).unwrap().visible);

    // Holding the click does not toggle again.
    h.tick(InputFrame::left(ControllerSample::default().with_thumbstick_button()));
    assert!(h.world.get::<OptionCycler>(panel).unwrap().visible);

    h.tick(InputFrame::left(ControllerSample::stick(1.0, 0.0)));
    assert_eq!(h.world.resource::<SettingsStore>().get("unit"), Some("Imperial"));
}

#[test]
fn tips_off_hides_controls_hints() {
    let (mut h, _) = settings_harness();
    h.tick(both_neutral());

    let visible = |world: &mut World| -> Vec<bool> {
        let mut q = world.query::<&ControlsHint>();
        q.iter(world).map(|hint| hint.visible).collect()
    };
    assert_eq!(visible(&mut h.world), vec![true, true]);

    // Up to "tips", release, then Right to "Off".
    h.tick(InputFrame::both(ControllerSample::default(), ControllerSample::stick(0.0, 1.0)));
    h.tick(both_neutral());
    h.tick(InputFrame::both(ControllerSample::default(), ControllerSample::stick(1.0, 0.0)));

    assert_eq!(h.world.resource::<SettingsStore>().get("tips"), Some("Off"));
    assert_eq!(visible(&mut h.world), vec![false, false]);
}

#[test]
fn controls_hint_hidden_for_untracked_controller() {
    let (mut h, _) = settings_harness();
    h.tick(InputFrame::left(ControllerSample::default()));

    let mut q = h.world.query::<&ControlsHint>();
    for hint in q.iter(&h.world) {
        assert_eq!(hint.visible, hint.hand == Handedness::Left);
    }
}

#[test]
fn settings_panels_do_not_spawn_their_own_hints() {
    let mut h = Harness::new(NavConfig::new());
    spawn_settings_panel(&mut h.world, measurement_settings());
    spawn_settings_panel(&mut h.world, measurement_settings().hidden());
    spawn_controls_hints(&mut h.world);
    h.tick(both_neutral());

    let mut q = h.world.query::<&ControlsHint>();
    let mut hands: Vec<_> = q.iter(&h.world).map(|hint| hint.hand.as_str()).collect();
    hands.sort();
    assert_eq!(hands, vec!["left", "right"]);
}

#[test]
fn outline_follows_raw_stick() {
    let (mut h, panel) = settings_harness();
    h.tick(InputFrame::left(ControllerSample::stick(0.5, -0.25)));

    let (x, y) = h.world.get::<OptionCycler>(panel).unwrap().outline_offset;
    assert!((x - 0.005).abs() < 1e-6);
    assert!((y + 0.0025).abs() < 1e-6);
}

// =============================================================================
// Scripted replay
// =============================================================================

#[test]
fn scripted_replay_drives_both_panels() {
    let mut h = Harness::new(config(4));
    let grid = spawn_catalog_panel(&mut h.world, &catalog(10), Handedness::Left);
    spawn_settings_panel(&mut h.world, measurement_settings().hidden());

    let script = InputScript::from_json(
        r#"{"frames": [
            {"hold": 5, "left": {"thumbstick": {"x": 1.0, "y": 0.0}}, "right": {}},
            {"left": {}, "right": {}},
            {"hold": 5, "left": {"thumbstick": {"x": 0.0, "y": -1.0}}, "right": {}},
            {"left": {"trigger": true}, "right": {}},
            {"left": {}, "right": {"thumbstick_button": true}},
            {"left": {}, "right": {}},
            {"hold": 2, "left": {}, "right": {"thumbstick": {"x": 0.0, "y": -1.0}}},
            {"left": {}, "right": {}},
            {"hold": 2, "left": {}, "right": {"thumbstick": {"x": 1.0, "y": 0.0}}}
        ]}"#,
    )
    .unwrap();
    let mut source = ScriptedInput::new(script);
    let mut spawned = Vec::new();
    while let Some(frame) = source.next_frame() {
        h.tick(frame);
        if let Some(model) = h.world.resource_mut::<PendingSpawn>().take() {
            spawned.push(model);
        }
    }

    assert_eq!(h.cursor(grid), GridCursor::new(1, 1));
    assert_eq!(spawned, vec!["models/item5.glb".to_string()]);
    let store = h.world.resource::<SettingsStore>();
    assert_eq!(store.get("mode"), Some("Clamp"));
    assert_eq!(store.get("unit"), Some("Metric"));
    assert_eq!(h.pulses().len(), 2);
}

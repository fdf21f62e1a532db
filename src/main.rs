//! xrnav headless runner.
//!
//! Replays controller input through the catalog and settings panels and logs
//! what the user would see and feel:
//! - cursor moves on the catalog grid and the model picked with the trigger
//! - settings category/value changes and the haptic pulses they produce
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --script assets/demo_script.json
//! cargo run -- --random-frames 5000 --seed 42
//! ```

use clap::Parser;
use std::path::PathBuf;

use xrnav::app::{
    build_schedule, build_world, run_frame, spawn_catalog_panel, spawn_controls_hints,
    spawn_settings_panel,
};
use xrnav::components::controlshint::ControlsHint;
use xrnav::components::gridpanel::GridPanel;
use xrnav::components::optioncycler::{OptionCycler, measurement_settings};
use xrnav::replay::{InputScript, InputSource, RandomInput, ScriptedInput};
use xrnav::resources::catalog::Catalog;
use xrnav::resources::haptics::{setup_haptics, shutdown_haptics};
use xrnav::resources::input::Handedness;
use xrnav::resources::navconfig::NavConfig;
use xrnav::resources::pendingspawn::PendingSpawn;
use xrnav::resources::settingsstore::SettingsStore;

/// xrnav panel navigation runner
#[derive(Parser)]
#[command(version, about = "Replays XR controller input through thumbstick-driven panels.")]
struct Cli {
    /// INI configuration file. Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Write the effective configuration back to the config path and continue.
    #[arg(long)]
    save_config: bool,

    /// JSON catalog listed on the grid panel.
    #[arg(long, value_name = "PATH", default_value = "assets/catalog.json")]
    catalog: String,

    /// JSON input script to replay.
    #[arg(long, value_name = "PATH", conflicts_with = "random_frames")]
    script: Option<String>,

    /// Generate this many frames of random input instead of a script.
    #[arg(long, value_name = "N")]
    random_frames: Option<usize>,

    /// Seed for --random-frames.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Hand driving the catalog panel.
    #[arg(long, default_value = "left")]
    hand: Handedness,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = NavConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let catalog = match Catalog::load_from_file(&cli.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut source: Box<dyn InputSource> = match (&cli.script, cli.random_frames) {
        (Some(path), _) => match InputScript::load_from_file(path) {
            Ok(script) => {
                log::info!("Replaying {} frames from {}", script.frame_count(), path);
                Box::new(ScriptedInput::new(script))
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        (None, Some(frames)) => {
            log::info!("Generating {} random frames (seed {})", frames, cli.seed);
            Box::new(RandomInput::new(cli.seed, frames))
        }
        (None, None) => {
            eprintln!("Error: nothing to replay, pass --script or --random-frames");
            std::process::exit(2);
        }
    };

    let mut world = build_world(config);
    let haptics_rx = setup_haptics(&mut world);
    let catalog_panel = spawn_catalog_panel(&mut world, &catalog, cli.hand);
    let settings_panel = spawn_settings_panel(&mut world, measurement_settings().hidden());
    spawn_controls_hints(&mut world);
    let mut schedule = build_schedule();

    let mut frames = 0usize;
    let mut pulses = 0usize;
    let mut spawned = 0usize;
    while let Some(frame) = source.next_frame() {
        run_frame(&mut world, &mut schedule, &frame);
        frames += 1;

        for pulse in haptics_rx.try_iter() {
            pulses += 1;
            log::debug!(
                "Haptic pulse on {} hand: intensity {} for {}ms",
                pulse.hand.as_str(),
                pulse.intensity,
                pulse.duration_ms
            );
        }
        if let Some(model) = world.resource_mut::<PendingSpawn>().take() {
            spawned += 1;
            log::info!("Frame {}: spawn '{}'", frames, model);
        }
    }
    shutdown_haptics(&mut world);

    let panel = world.get::<GridPanel>(catalog_panel);
    let cycler = world.get::<OptionCycler>(settings_panel);
    if let (Some(panel), Some(cycler)) = (panel, cycler) {
        let cursor = panel.cursor();
        println!("frames replayed:   {}", frames);
        println!("models spawned:    {}", spawned);
        println!("haptic pulses:     {}", pulses);
        println!(
            "catalog cursor:    ({}, {}) '{}'",
            cursor.row,
            cursor.col,
            panel.selected().label
        );
        println!(
            "settings panel:    {} (active '{}')",
            if cycler.visible { "shown" } else { "hidden" },
            cycler.active().key
        );
    }
    let store = world.resource::<SettingsStore>();
    let mut keys: Vec<_> = store.values.keys().collect();
    keys.sort();
    for key in keys {
        println!("  {:<8} = {}", key, store.values[key]);
    }

    let mut hints = world.query::<&ControlsHint>();
    for hint in hints.iter(&world) {
        println!(
            "{} controls hint: {}",
            hint.hand.as_str(),
            if hint.visible { "visible" } else { "hidden" }
        );
    }
}

//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `catalog` – JSON item catalog used to fill grid panels
//! - `haptics` – channel bridge to the host's haptic actuators
//! - `input` – per-frame controller state (sticks and buttons) for both hands
//! - `navconfig` – INI-backed tuning values (threshold, row width, haptics)
//! - `pendingspawn` – payload picked on a catalog panel, waiting for the host
//! - `settingsstore` – current value of each user-facing setting
pub mod catalog;
pub mod haptics;
pub mod input;
pub mod navconfig;
pub mod pendingspawn;
pub mod settingsstore;

//! ECS components for panel entities.
//!
//! Submodules overview:
//! - [`controlshint`] – per-controller button legend toggled by a setting
//! - [`gridpanel`] – ragged grid of selectable items with bounds-checked cursor
//! - [`optioncycler`] – cyclic category/value selector for settings screens
//! - [`sticknavigator`] – thumbstick binding plus classification and debounce

pub mod controlshint;
pub mod gridpanel;
pub mod optioncycler;
pub mod sticknavigator;

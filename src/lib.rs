//! xrnav library.
//!
//! Thumbstick-driven selection for XR panels: a direction classifier with
//! debounce, a ragged grid selector, and a cyclic settings selector, exposed
//! as ECS components, resources, systems, and events.

pub mod app;
pub mod components;
pub mod direction;
pub mod events;
pub mod replay;
pub mod resources;
pub mod systems;

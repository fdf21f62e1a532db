//! Event types and observers.
//!
//! Events let panel systems report what happened without knowing who
//! reacts to it.
//!
//! Submodules:
//! - [`haptics`] – haptic pulse messages forwarded to the host
//! - [`selection`] – grid cursor moves and item activation
//! - [`settings`] – setting value changes and the store observer
pub mod haptics;
pub mod selection;
pub mod settings;

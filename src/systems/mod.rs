//! Panel systems.
//!
//! Submodules overview
//! - [`gridpanel`] – thumbstick navigation and trigger activation for grid panels
//! - [`haptics`] – forward haptic pulse messages to the host
//! - [`input`] – ingest the host's per-frame controller sample into
//!   [`crate::resources::input::XrInputState`]
//! - [`settings`] – settings panel toggle, option cycling, and controls hints

pub mod gridpanel;
pub mod haptics;
pub mod input;
pub mod settings;

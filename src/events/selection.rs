//! Grid panel selection events.
//!
//! - [`SelectionMovedEvent`] fires after every accepted cursor move
//! - [`ItemActivatedEvent`] fires when the highlighted item is confirmed;
//!   [`item_activated_observer`] stores its payload in [`PendingSpawn`]

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::gridpanel::GridCursor;
use crate::resources::pendingspawn::PendingSpawn;

#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionMovedEvent {
    pub panel: Entity,
    pub from: GridCursor,
    pub to: GridCursor,
}

#[derive(Event, Debug, Clone)]
pub struct ItemActivatedEvent {
    pub panel: Entity,
    pub cursor: GridCursor,
    pub item_id: String,
    pub payload: String,
}

/// Queue the activated item's payload for the host to spawn.
pub fn item_activated_observer(trigger: On<ItemActivatedEvent>, mut pending: ResMut<PendingSpawn>) {
    let event = trigger.event();
    log::info!(
        "Item '{}' activated on panel {:?}, queueing '{}'",
        event.item_id,
        event.panel,
        event.payload
    );
    pending.set(event.payload.clone());
}

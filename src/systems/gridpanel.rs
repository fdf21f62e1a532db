//! Grid panel systems.
//!
//! - [`grid_panel_navigation_system`] – moves each panel's cursor one step per
//!   thumbstick push and triggers [`SelectionMovedEvent`] on accepted moves
//! - [`grid_panel_activation_system`] – triggers [`ItemActivatedEvent`] for the
//!   highlighted item when the bound hand's trigger is pressed
//!
//! Run activation after navigation so a push and a press in the same frame
//! activate the item the cursor lands on.

use bevy_ecs::prelude::*;
use log::{debug, trace};

use crate::components::gridpanel::GridPanel;
use crate::components::sticknavigator::StickNavigator;
use crate::events::selection::{ItemActivatedEvent, SelectionMovedEvent};
use crate::resources::input::XrInputState;

pub fn grid_panel_navigation_system(
    input: Res<XrInputState>,
    mut query: Query<(Entity, &mut GridPanel, &mut StickNavigator)>,
    mut commands: Commands,
) {
    for (entity, mut panel, mut navigator) in query.iter_mut() {
        let hand = navigator.binding.resolve(&input);
        let Some(direction) = navigator.poll(input.controller(hand).thumbstick) else {
            continue;
        };

        let from = panel.cursor();
        if panel.navigate(direction) {
            let to = panel.cursor();
            debug!(
                "Panel {:?}: {:?} ({}, {}) -> ({}, {}) '{}'",
                entity,
                direction,
                from.row,
                from.col,
                to.row,
                to.col,
                panel.selected().id
            );
            commands.trigger(SelectionMovedEvent {
                panel: entity,
                from,
                to,
            });
        } else {
            trace!(
                "Panel {:?}: {:?} from ({}, {}) rejected",
                entity, direction, from.row, from.col
            );
        }
    }
}

pub fn grid_panel_activation_system(
    input: Res<XrInputState>,
    query: Query<(Entity, &GridPanel, &StickNavigator)>,
    mut commands: Commands,
) {
    for (entity, panel, navigator) in query.iter() {
        let hand = navigator.binding.resolve(&input);
        if !input.controller(hand).trigger.just_pressed {
            continue;
        }
        let item = panel.selected();
        commands.trigger(ItemActivatedEvent {
            panel: entity,
            cursor: panel.cursor(),
            item_id: item.id.clone(),
            payload: item.payload.clone(),
        });
    }
}

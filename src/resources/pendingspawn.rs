use bevy_ecs::prelude::Resource;

/// Model chosen on a catalog panel, waiting for the host to place it.
///
/// Set by [`item_activated_observer`](crate::events::selection::item_activated_observer);
/// the host takes it once the object is spawned.
#[derive(Resource, Debug, Clone, Default)]
pub struct PendingSpawn {
    pub model: Option<String>,
}

impl PendingSpawn {
    pub fn set(&mut self, model: impl Into<String>) {
        self.model = Some(model.into());
    }
    pub fn take(&mut self) -> Option<String> {
        self.model.take()
    }
}

//! Item catalog shown on grid panels.
//!
//! The catalog is a JSON array of entries:
//!
//! ```json
//! [
//!   { "item_id": "Chair 1", "image_path": "chair1.png", "3dmodel_id": "models/chair1.glb" }
//! ]
//! ```
//!
//! [`Catalog::to_grid_items`] converts entries into
//! [`GridItem`](crate::components::gridpanel::GridItem)s, using the model id
//! as the payload handed to the host on activation.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::gridpanel::GridItem;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub item_id: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(rename = "3dmodel_id")]
    pub model_id: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, String> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(text).map_err(|e| format!("Invalid catalog JSON: {}", e))?;
        if entries.is_empty() {
            return Err("Catalog has no entries".to_string());
        }
        Ok(Self { entries })
    }

    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog {}: {}", path, e))?;
        Self::from_json(&text)
    }

    pub fn to_grid_items(&self) -> Vec<GridItem> {
        self.entries
            .iter()
            .map(|entry| GridItem::new(&entry.item_id, &entry.item_id, &entry.model_id))
            .collect()
    }
}

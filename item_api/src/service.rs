//! Item service: id-assignment policy on top of an [`ItemStore`].

use std::sync::Arc;
use tracing::{info, instrument};

use crate::model::{Item, ItemId};
use crate::store::ItemStore;

/// Orchestrates item operations over an injected store.
///
/// Clients never choose ids: `create_item` discards any id in the payload and
/// `update_item` replaces it with the target id. Updating a missing id is
/// reported as `None` and never creates a record.
#[derive(Debug, Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn get_all_items(&self) -> Vec<Item> {
        self.store.find_all()
    }

    #[instrument(skip(self))]
    pub fn get_item_by_id(&self, id: ItemId) -> Option<Item> {
        self.store.find_by_id(id)
    }

    #[instrument(skip(self, item))]
    pub fn create_item(&self, mut item: Item) -> Item {
        item.id = None;
        let created = self.store.save(item);
        info!("Created item {:?}", created.id);
        created
    }

    #[instrument(skip(self, item))]
    pub fn update_item(&self, id: ItemId, mut item: Item) -> Option<Item> {
        if !self.store.exists_by_id(id) {
            return None;
        }

        item.id = Some(id);
        let updated = self.store.save(item);
        info!("Updated item {}", id);
        Some(updated)
    }

    #[instrument(skip(self))]
    pub fn delete_item(&self, id: ItemId) -> bool {
        let deleted = self.store.delete_by_id(id);
        if deleted {
            info!("Deleted item {}", id);
        }
        deleted
    }

    pub fn item_count(&self) -> usize {
        self.store.len()
    }
}

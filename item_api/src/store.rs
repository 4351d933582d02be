//! In-process item storage.
//!
//! [`ItemStore`] is the seam between the service layer and whatever holds the
//! records. [`InMemoryItemStore`] is the only backend: a sharded concurrent map
//! plus an atomic id counter, so readers and writers never contend on a single
//! global lock.

use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::model::{Item, ItemId};

/// Keyed storage for [`Item`] records.
///
/// Every operation is infallible and safe to call from many tasks at once.
pub trait ItemStore: Send + Sync + std::fmt::Debug {
    /// Snapshot of every stored item.
    fn find_all(&self) -> Vec<Item>;

    fn find_by_id(&self, id: ItemId) -> Option<Item>;

    /// Store `item`, assigning the next id if it has none. Overwrites any
    /// record already held under that id and returns what was stored.
    fn save(&self, item: Item) -> Item;

    /// Returns `true` if a record was removed.
    fn delete_by_id(&self, id: ItemId) -> bool;

    fn exists_by_id(&self, id: ItemId) -> bool;

    /// Number of stored items.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`ItemStore`] backed by a [`DashMap`].
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryItemStore {
    items: DashMap<ItemId, Item>,
    next_id: AtomicI64,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn find_all(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);
        items
    }

    fn find_by_id(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    fn save(&self, mut item: Item) -> Item {
        let id = match item.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                item.id = Some(id);
                id
            }
        };

        self.items.insert(id, item.clone());
        debug!("Stored item {}", id);
        item
    }

    fn delete_by_id(&self, id: ItemId) -> bool {
        let removed = self.items.remove(&id).is_some();
        if removed {
            debug!("Removed item {}", id);
        }
        removed
    }

    fn exists_by_id(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

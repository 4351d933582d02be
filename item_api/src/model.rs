//! The `Item` record exchanged over the API and held by the store.

use serde::{Deserialize, Serialize};

/// Server-assigned item identifier. Signed so any integer a client sends
/// in a payload or path parses and is then handled by the service.
pub type ItemId = i64;

/// The single domain record.
///
/// `id` is `None` until the store assigns one. Clients may send any value
/// for it; the service layer discards it on create and overwrites it on
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }
}

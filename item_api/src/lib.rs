//! Item API - a minimal CRUD HTTP service.
//!
//! Three layers: [`server`] maps HTTP onto [`service::ItemService`], which
//! enforces id assignment on top of a concurrent [`store::ItemStore`].

pub mod cli;
pub mod middleware;
pub mod model;
pub mod server;
pub mod service;
pub mod settings;
pub mod store;
pub mod telemetry;

pub use model::{Item, ItemId};
pub use service::ItemService;
pub use store::{InMemoryItemStore, ItemStore};

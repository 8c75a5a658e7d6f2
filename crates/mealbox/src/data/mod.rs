//! Data persistence
//!
//! Handles favorites and the key-value storage they are written to.

pub mod favorites;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::{toggle, FavoriteSet, FavoritesStore};
pub use storage::{config_dir, FileStore, KeyValueStore, MemoryStore};
pub use types::{Identifier, Named, NamedEntity};

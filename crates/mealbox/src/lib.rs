//! Mealbox Services
//!
//! Meal catalog, category search, and favorites persistence.
//!
//! ## Quick start
//!
//! ```no_run
//! use mealbox::data::{FavoritesStore, FileStore};
//! use mealbox::Catalog;
//!
//! # async fn run() -> mealbox::error::Result<()> {
//! let store = FavoritesStore::new(FileStore::default_location()?);
//! let favorites = store.load_or_default().await?;
//! let favorites = store.toggle(&favorites, "3");
//! store.save(&favorites).await?;
//!
//! let catalog = Catalog::sample();
//! let matches = catalog.search_categories("ital");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;

pub use catalog::Catalog;
pub use error::{AppError, Result};
pub use filter::CategoryFilter;

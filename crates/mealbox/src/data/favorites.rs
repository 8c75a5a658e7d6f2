//! Favorites management
//!
//! `FavoriteSet` is an insertion-ordered list of identifiers with no
//! duplicates. `FavoritesStore` reads and writes it as a JSON array under a
//! single key of a [`KeyValueStore`]. Nothing is cached between calls: every
//! load re-reads and every save rewrites the whole record.

use crate::config::storage::FAVORITES_KEY;
use crate::data::storage::KeyValueStore;
use crate::data::types::Identifier;
use crate::error::{AppError, Result};
use serde::Serialize;
use std::collections::HashSet;

// =============================================================================
// FavoriteSet
// =============================================================================

/// Ordered set of favorited identifiers
///
/// Serializes as a plain JSON array of strings. Equality compares
/// membership only; use [`FavoriteSet::ids`] to compare order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<Identifier>,
}

impl FavoriteSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from identifiers, keeping the first occurrence of repeats
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .map(Into::into)
            .filter(|id: &Identifier| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }

    /// Check if an identifier is favorited
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav.as_str() == id)
    }

    /// Return a new set with `id` removed if present, or appended if absent
    pub fn toggled(&self, id: impl Into<Identifier>) -> Self {
        let id = id.into();
        let mut ids = self.ids.clone();
        match ids.iter().position(|fav| *fav == id) {
            Some(pos) => {
                ids.remove(pos);
            }
            None => ids.push(id),
        }
        Self { ids }
    }

    /// Favorited identifiers in insertion order
    pub fn ids(&self) -> &[Identifier] {
        &self.ids
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn into_vec(self) -> Vec<Identifier> {
        self.ids
    }
}

impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are duplicate-free, so equal length plus inclusion is enough
        self.len() == other.len() && self.iter().all(|id| other.contains(id.as_str()))
    }
}

impl Eq for FavoriteSet {}

impl<'a> IntoIterator for &'a FavoriteSet {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// Flip membership of `id` in `current`
///
/// Pure: the caller decides when to save the result.
pub fn toggle(current: &FavoriteSet, id: impl Into<Identifier>) -> FavoriteSet {
    current.toggled(id)
}

// =============================================================================
// FavoritesStore
// =============================================================================

/// Persists a `FavoriteSet` under one key of a key-value store
pub struct FavoritesStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Create a store using the default favorites key
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, FAVORITES_KEY)
    }

    /// Create a store using a custom key
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read the favorites record
    ///
    /// A missing or zero-length record yields an empty set. Any other record
    /// that is not a JSON array of strings fails with
    /// [`AppError::CorruptState`].
    pub async fn load(&self) -> Result<FavoriteSet> {
        let bytes = self
            .backend
            .get(&self.key)
            .await
            .map_err(|source| AppError::PersistenceReadFailure {
                key: self.key.clone(),
                source,
            })?;

        let bytes = match bytes {
            Some(b) if !b.is_empty() => b,
            _ => {
                log::debug!("No favorites stored under '{}'", self.key);
                return Ok(FavoriteSet::new());
            }
        };

        let ids: Vec<Identifier> =
            serde_json::from_slice(&bytes).map_err(|source| AppError::CorruptState {
                key: self.key.clone(),
                source,
            })?;

        let stored = ids.len();
        let set = FavoriteSet::from_ids(ids);
        if set.len() != stored {
            log::warn!(
                "Dropped {} duplicate favorite(s) stored under '{}'",
                stored - set.len(),
                self.key
            );
        }

        log::debug!("Loaded {} favorite(s)", set.len());
        Ok(set)
    }

    /// Load, treating a corrupt record as empty
    ///
    /// Read failures still propagate.
    pub async fn load_or_default(&self) -> Result<FavoriteSet> {
        match self.load().await {
            Err(e) if e.is_corrupt_state() => {
                log::warn!("{e}; starting with no favorites");
                Ok(FavoriteSet::new())
            }
            other => other,
        }
    }

    /// See [`toggle`]
    pub fn toggle(&self, current: &FavoriteSet, id: impl Into<Identifier>) -> FavoriteSet {
        toggle(current, id)
    }

    /// Overwrite the stored record with `set`
    ///
    /// Failures are returned as-is; there is no retry.
    pub async fn save(&self, set: &FavoriteSet) -> Result<()> {
        let write_failure = |source: std::io::Error| AppError::PersistenceWriteFailure {
            key: self.key.clone(),
            source,
        };

        let content = serde_json::to_vec(set).map_err(|e| write_failure(e.into()))?;
        self.backend
            .set(&self.key, &content)
            .await
            .map_err(write_failure)?;

        log::debug!("Saved {} favorite(s)", set.len());
        Ok(())
    }

    /// Load, toggle `id`, save, and return the saved set
    pub async fn toggle_and_save(&self, id: impl Into<Identifier>) -> Result<FavoriteSet> {
        let current = self.load().await?;
        let updated = toggle(&current, id);
        self.save(&updated).await?;
        Ok(updated)
    }
}

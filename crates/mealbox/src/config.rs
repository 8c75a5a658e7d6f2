//! Configuration constants for mealbox services

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "mealbox";
}

/// Persistence-related configuration
pub mod storage {
    /// Key under which the favorites record is stored
    pub const FAVORITES_KEY: &str = "favorites";

    /// Extension appended to keys by the file-backed store
    pub const FILE_EXTENSION: &str = "json";
}

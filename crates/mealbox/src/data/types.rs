//! Common data types
//!
//! Shared types used across the catalog, filter, and favorites modules.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// =============================================================================
// Named - Trait for types that can be searched by title
// =============================================================================

/// Trait for types that carry a display title
///
/// This provides a uniform interface for text filtering across different
/// types (categories, meals, or an integrator's own view models).
pub trait Named {
    /// Get the display title
    fn title(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn title(&self) -> &str {
        (**self).title()
    }
}

// =============================================================================
// Identifier - Opaque item ID
// =============================================================================

/// An opaque string naming a selectable item (category or meal)
///
/// Uniqueness is up to whoever hands these out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// NamedEntity - An item subject to text filtering
// =============================================================================

/// A `{ id, title }` pair: a category or a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: Identifier,
    pub title: String,
}

impl NamedEntity {
    pub fn new(id: impl Into<Identifier>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Named for NamedEntity {
    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_serializes_as_plain_string() {
        let id = Identifier::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");

        let parsed: Identifier = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(parsed, "abc");
    }

    #[test]
    fn test_identifier_conversions() {
        let from_str: Identifier = "7".into();
        let from_string: Identifier = String::from("7").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.as_str(), "7");
        assert_eq!(from_str.to_string(), "7");
        assert_eq!(from_str.into_inner(), "7");
    }

    #[test]
    fn test_named_entity() {
        let entity = NamedEntity::new("1", "Italian");
        assert_eq!(entity.id, "1");
        assert_eq!(entity.title(), "Italian");

        // Blanket impl for references
        let by_ref = &entity;
        assert_eq!(Named::title(&by_ref), "Italian");
    }
}

//! Text search over titled items
//!
//! An item matches when its lower-cased title contains the lower-cased
//! query. Order is preserved and nothing is ranked.

use crate::data::types::Named;

/// Case-insensitive substring filter
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Query, already lower-cased
    needle: String,
}

impl CategoryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether this filter lets everything through
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check if an item's title matches
    pub fn matches<T: Named + ?Sized>(&self, item: &T) -> bool {
        self.is_empty() || item.title().to_lowercase().contains(&self.needle)
    }

    /// Matching items, in input order
    pub fn apply<T: Named + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|item| self.matches(*item)).cloned().collect()
    }

    /// Borrowing variant of [`CategoryFilter::apply`]
    pub fn apply_ref<'a, T: Named>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Items whose title contains `query`, ignoring case
pub fn apply<T: Named + Clone>(query: &str, items: &[T]) -> Vec<T> {
    CategoryFilter::new(query).apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::{Identifier, NamedEntity};

    fn categories() -> Vec<NamedEntity> {
        vec![NamedEntity::new("1", "Italian"), NamedEntity::new("2", "Asian")]
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(apply("", &categories()), categories());
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(
            apply("ital", &categories()),
            vec![NamedEntity::new("1", "Italian")]
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            apply("ASIAN", &categories()),
            vec![NamedEntity::new("2", "Asian")]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(apply("xyz", &categories()).is_empty());
    }

    #[test]
    fn test_substring_anywhere() {
        // "ian" appears in both titles
        assert_eq!(apply("IAN", &categories()), categories());
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<NamedEntity> = Vec::new();
        assert!(apply("anything", &items).is_empty());
        assert!(apply("", &items).is_empty());
    }

    #[test]
    fn test_duplicate_titles_kept_in_order() {
        let items = vec![
            NamedEntity::new("a", "Pho"),
            NamedEntity::new("b", "Sushi"),
            NamedEntity::new("c", "Pho"),
        ];
        let ids: Vec<_> = apply("pho", &items).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["a", "c"].map(Identifier::from));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let items = vec![NamedEntity::new("1", "Œufs Cocotte"), NamedEntity::new("2", "Phở")];
        assert_eq!(apply("œufs", &items).len(), 1);
        assert_eq!(apply("PHỞ", &items).len(), 1);
        // No diacritic folding
        assert!(apply("pho", &items).is_empty());
    }

    #[test]
    fn test_whitespace_is_literal() {
        let items = vec![NamedEntity::new("1", "Spaghetti Bolognese")];
        assert_eq!(apply("i b", &items).len(), 1);
        assert!(apply(" spaghetti", &items).is_empty());
    }

    #[test]
    fn test_filter_value() {
        let filter = CategoryFilter::new("AsI");
        assert!(!filter.is_empty());
        assert!(filter.matches(&NamedEntity::new("2", "Asian")));
        assert!(!filter.matches(&NamedEntity::new("1", "Italian")));

        let items = categories();
        let borrowed = filter.apply_ref(&items);
        assert_eq!(borrowed, vec![&items[1]]);

        assert!(CategoryFilter::default().is_empty());
    }
}

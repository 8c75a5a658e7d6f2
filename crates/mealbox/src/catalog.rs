//! Meal catalog
//!
//! Categories and the meals listed under each one.

use crate::data::types::{Identifier, NamedEntity};
use crate::filter::CategoryFilter;
use std::collections::HashMap;

/// Categories in display order, plus the meals of each category
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<NamedEntity>,
    meals: HashMap<Identifier, Vec<NamedEntity>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in sample menu
    pub fn sample() -> Self {
        Self::new()
            .with_category(
                NamedEntity::new("1", "Italian"),
                vec![
                    NamedEntity::new("1", "Spaghetti Bolognese"),
                    NamedEntity::new("2", "Lasagna"),
                ],
            )
            .with_category(
                NamedEntity::new("2", "Asian"),
                vec![NamedEntity::new("3", "Sushi"), NamedEntity::new("4", "Pho")],
            )
    }

    /// Add a category and its meals
    ///
    /// Re-adding a category id replaces its title and meals in place.
    pub fn with_category(mut self, category: NamedEntity, meals: Vec<NamedEntity>) -> Self {
        match self.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => existing.title = category.title.clone(),
            None => self.categories.push(category.clone()),
        }
        self.meals.insert(category.id, meals);
        self
    }

    /// All categories in display order
    pub fn categories(&self) -> &[NamedEntity] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&NamedEntity> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Meals of a category; empty for an unknown category
    pub fn meals_for(&self, category_id: &str) -> &[NamedEntity] {
        self.meals.get(category_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a meal in any category
    pub fn meal(&self, id: &str) -> Option<&NamedEntity> {
        self.categories
            .iter()
            .flat_map(|c| self.meals_for(c.id.as_str()))
            .find(|m| m.id == id)
    }

    /// Categories whose title contains `query`, ignoring case
    pub fn search_categories(&self, query: &str) -> Vec<&NamedEntity> {
        CategoryFilter::new(query).apply_ref(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_categories() {
        let catalog = Catalog::sample();
        let titles: Vec<_> = catalog.categories().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Italian", "Asian"]);
    }

    #[test]
    fn test_meals_for() {
        let catalog = Catalog::sample();

        let italian: Vec<_> = catalog.meals_for("1").iter().map(|m| m.title.as_str()).collect();
        assert_eq!(italian, ["Spaghetti Bolognese", "Lasagna"]);

        let asian: Vec<_> = catalog.meals_for("2").iter().map(|m| m.id.as_str()).collect();
        assert_eq!(asian, ["3", "4"]);
    }

    #[test]
    fn test_meals_for_unknown_category() {
        assert!(Catalog::sample().meals_for("99").is_empty());
        assert!(Catalog::new().meals_for("1").is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.category("2").map(|c| c.title.as_str()), Some("Asian"));
        assert_eq!(catalog.meal("4").map(|m| m.title.as_str()), Some("Pho"));
        assert!(catalog.meal("5").is_none());
        assert!(catalog.category("3").is_none());
    }

    #[test]
    fn test_search_categories() {
        let catalog = Catalog::sample();

        let found = catalog.search_categories("ITAL");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");

        assert_eq!(catalog.search_categories("").len(), 2);
        assert!(catalog.search_categories("mexican").is_empty());
    }

    #[test]
    fn test_with_category_replaces() {
        let catalog = Catalog::sample().with_category(
            NamedEntity::new("1", "Italiano"),
            vec![NamedEntity::new("9", "Risotto")],
        );

        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.categories()[0].title, "Italiano");
        assert_eq!(catalog.meals_for("1").len(), 1);
        assert!(catalog.meal("1").is_none());
    }
}

//! Category registry types.
//!
//! A registry is the ordered list of filter buckets a screen offers. The
//! `None` id is reserved for the "all" bucket.

use super::CatalogError;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Defines a single filter bucket.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Category {
    /// Return the "all" bucket with the given label.
    ///
    pub fn all(label: &str) -> Self {
        Category {
            id: None,
            label: label.to_string(),
            icon: None,
        }
    }

    /// Return a concrete bucket.
    ///
    pub fn new(id: &str, label: &str) -> Self {
        Category {
            id: Some(id.to_string()),
            label: label.to_string(),
            icon: None,
        }
    }

    pub fn is_all(&self) -> bool {
        self.id.is_none()
    }

    /// Label prefixed with the icon, if any.
    ///
    pub fn display_label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{} {}", icon, self.label),
            None => self.label.clone(),
        }
    }
}

/// Ordered, validated list of categories for one screen.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry, rejecting duplicate ids and more than one "all"
    /// bucket.
    ///
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let registry = CategoryRegistry { categories };
        registry.validate()?;
        Ok(registry)
    }

    /// Check the registry invariants. Deserialized registries are unchecked
    /// until this runs.
    ///
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let mut all_count = 0;
        for category in &self.categories {
            match &category.id {
                None => {
                    all_count += 1;
                    if all_count > 1 {
                        return Err(CatalogError::MultipleAllCategories {
                            label: category.label.clone(),
                        });
                    }
                }
                Some(id) => {
                    if !seen.insert(id.as_str()) {
                        return Err(CatalogError::DuplicateCategory { id: id.clone() });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn first(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Position of the category with the given id. `None` finds the "all"
    /// bucket.
    ///
    pub fn position(&self, id: Option<&str>) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.id.as_deref() == id)
    }

    /// Whether `id` names a concrete category in this registry.
    ///
    pub fn contains(&self, id: &str) -> bool {
        self.position(Some(id)).is_some()
    }

    /// Whether the registry offers an unfiltered bucket.
    ///
    pub fn has_all(&self) -> bool {
        self.categories.iter().any(Category::is_all)
    }

    /// Concrete categories, skipping the "all" bucket.
    ///
    pub fn concrete(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_all())
    }
}

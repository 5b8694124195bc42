//! Category filtering.
//!
//! `filter_items` is the pure derivation from (items, selection) to the
//! visible subsequence. `FilterState` owns the selection for one screen.

use crate::catalog::Categorized;
use log::*;

/// Return the items whose category equals `selected`, in input order. A
/// `None` selection is the unfiltered view and returns every item.
///
/// Items without a category only appear in the unfiltered view. A selection
/// that matches nothing yields an empty list, never an error.
pub fn filter_items<'a, T: Categorized>(items: &'a [T], selected: Option<&str>) -> Vec<&'a T> {
    match selected {
        None => items.iter().collect(),
        Some(id) => items
            .iter()
            .filter(|item| item.category() == Some(id))
            .collect(),
    }
}

/// Holds the selected category id for one screen instance.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: Option<String>,
}

impl FilterState {
    /// Return a fresh holder with the unfiltered view selected.
    ///
    pub fn new() -> Self {
        FilterState::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Replace the selection. Ids are not checked against any registry.
    ///
    pub fn select(&mut self, category_id: Option<String>) -> &mut Self {
        debug!("Selecting category {:?}...", category_id);
        self.selected = category_id;
        self
    }

    /// Return to the unfiltered view.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.select(None)
    }

    pub fn is_filtered(&self) -> bool {
        self.selected.is_some()
    }

    /// Apply the current selection to `items`.
    ///
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_items(items, self.selected())
    }
}

//! Accordion expansion state.
//!
//! Two holders: `ExpandedKeys` lets any number of leaf items be open at
//! once, `SectionExpansion` keeps at most one top-level section open.

use crate::catalog::CategoryRegistry;
use log::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Multi-expand state keyed by content item key.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedKeys {
    keys: HashSet<String>,
}

impl ExpandedKeys {
    pub fn new() -> Self {
        ExpandedKeys::default()
    }

    /// Open `key` if closed, close it if open.
    ///
    pub fn toggle(&mut self, key: &str) -> &mut Self {
        if !self.keys.remove(key) {
            self.keys.insert(key.to_string());
        }
        debug!("Toggled item '{}' (expanded: {})", key, self.is_expanded(key));
        self
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Close every key for which `predicate` holds.
    ///
    pub fn collapse_where<F: Fn(&str) -> bool>(&mut self, predicate: F) -> &mut Self {
        self.keys.retain(|k| !predicate(k));
        self
    }
}

/// What happens to nested item expansion when its section collapses.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedExpansion {
    /// Items keep their state and reappear expanded when the section reopens.
    Preserve,
    /// Items inside a collapsing section are closed.
    Reset,
}

impl Default for NestedExpansion {
    fn default() -> Self {
        NestedExpansion::Preserve
    }
}

/// Single-expand state for top-level sections.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionExpansion {
    expanded: Option<String>,
}

impl SectionExpansion {
    /// Return state with the registry's first category open. An empty
    /// registry (or one led by the "all" bucket) starts with nothing open.
    ///
    pub fn new(registry: &CategoryRegistry) -> Self {
        SectionExpansion {
            expanded: registry.first().and_then(|c| c.id.clone()),
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Collapse `id` if it is open, otherwise open it and close any other.
    /// Returns the id of the section that was closed, if any.
    ///
    pub fn toggle_section(&mut self, id: &str) -> Option<String> {
        let closed = if self.is_expanded(id) {
            self.expanded.take()
        } else {
            self.expanded.replace(id.to_string())
        };
        debug!(
            "Toggled section '{}' (expanded: {:?}, closed: {:?})",
            id, self.expanded, closed
        );
        closed
    }
}

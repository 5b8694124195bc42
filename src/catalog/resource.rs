use chrono::NaiveDate;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything that can be filtered by category and tracked by key.
///
pub trait Categorized {
    fn key(&self) -> &str;
    fn category(&self) -> Option<&str>;
}

/// Defines how a screen lays out its content.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Category tabs above a filtered list.
    List,
    /// Categories as single-expand sections, items nested inside.
    Accordion,
}

impl Default for Layout {
    fn default() -> Self {
        Layout::List
    }
}

/// Defines a displayable record: campaign, creator, story, event, menu
/// entry or FAQ question.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl Categorized for ContentItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

impl ContentItem {
    /// Return a minimal item, mostly useful for fixtures.
    ///
    pub fn new(key: &str, category: Option<&str>) -> Self {
        ContentItem {
            key: key.to_string(),
            title: key.to_string(),
            category: category.map(str::to_string),
            summary: String::new(),
            body: String::new(),
            date: None,
            meta: BTreeMap::new(),
        }
    }

    /// Human-readable date, if the item carries one.
    ///
    pub fn formatted_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%a %d %b %Y").to_string())
    }
}

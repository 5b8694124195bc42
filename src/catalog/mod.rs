//! Catalog module.
//!
//! A catalog is the static content a skin ships with: an ordered list of
//! screens, each carrying its own category registry and content items.
//! Catalogs are read from YAML or JSON, and two are built in.

mod category;
mod error;
mod resource;

pub use category::{Category, CategoryRegistry};
pub use error::CatalogError;
pub use resource::{Categorized, ContentItem, Layout};

use log::*;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt, fs,
    path::Path,
    str::FromStr,
};

const MARKETPLACE_CATALOG: &str = include_str!("../../data/marketplace.yml");
const CLUB_CATALOG: &str = include_str!("../../data/club.yml");

/// Specifying the built-in app skins.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skin {
    Marketplace,
    Club,
}

impl Default for Skin {
    fn default() -> Self {
        Skin::Marketplace
    }
}

impl fmt::Display for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skin::Marketplace => write!(f, "marketplace"),
            Skin::Club => write!(f, "club"),
        }
    }
}

impl FromStr for Skin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "marketplace" => Ok(Skin::Marketplace),
            "club" => Ok(Skin::Club),
            other => Err(format!("unknown skin '{}'", other)),
        }
    }
}

/// Defines one browsable screen.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    pub categories: CategoryRegistry,
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

fn default_empty_message() -> String {
    "Nothing here yet.".to_string()
}

impl Screen {
    /// Check registry invariants and item keys. Items pointing at unknown
    /// categories are returned as warnings, or rejected when `strict`.
    ///
    fn validate(&self, strict: bool) -> Result<Vec<CatalogError>, CatalogError> {
        self.categories.validate()?;

        let mut keys = HashSet::new();
        let mut warnings = vec![];
        for item in &self.items {
            if !keys.insert(item.key()) {
                return Err(CatalogError::DuplicateItem {
                    screen: self.id.clone(),
                    key: item.key().to_string(),
                });
            }
            if let Some(category) = item.category() {
                if !self.categories.contains(category) {
                    let problem = CatalogError::UnknownCategory {
                        screen: self.id.clone(),
                        key: item.key().to_string(),
                        category: category.to_string(),
                    };
                    if strict {
                        return Err(problem);
                    }
                    warnings.push(problem);
                }
            }
        }
        Ok(warnings)
    }
}

/// Defines the full static content for a skin.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub skin: Skin,
    pub screens: Vec<Screen>,
}

impl Catalog {
    /// Return the built-in catalog for the given skin.
    ///
    pub fn builtin(skin: Skin) -> Result<Catalog, CatalogError> {
        debug!("Loading built-in {} catalog...", skin);
        let contents = match skin {
            Skin::Marketplace => MARKETPLACE_CATALOG,
            Skin::Club => CLUB_CATALOG,
        };
        Catalog::from_yaml(contents)
    }

    /// Load a catalog from disk, choosing the parser by file extension.
    ///
    pub fn from_path(path: &Path) -> Result<Catalog, CatalogError> {
        info!("Loading catalog from {}...", path.display());
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => Catalog::from_yaml(&contents),
            Some("json") => Catalog::from_json(&contents),
            other => Err(CatalogError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Catalog, CatalogError> {
        serde_yaml::from_str(contents).map_err(|e| CatalogError::ParseFailed(e.to_string()))
    }

    pub fn from_json(contents: &str) -> Result<Catalog, CatalogError> {
        serde_json::from_str(contents).map_err(|e| CatalogError::ParseFailed(e.to_string()))
    }

    /// Validate every screen. Returns the permissive-mode warnings, each
    /// also logged.
    ///
    pub fn validate(&self, strict: bool) -> Result<Vec<CatalogError>, CatalogError> {
        if self.screens.is_empty() {
            return Err(CatalogError::Empty(self.name.clone()));
        }
        let mut ids = HashSet::new();
        let mut warnings = vec![];
        for screen in &self.screens {
            if !ids.insert(screen.id.as_str()) {
                return Err(CatalogError::DuplicateScreen(screen.id.clone()));
            }
            warnings.extend(screen.validate(strict)?);
        }
        for warning in &warnings {
            warn!("{}", warning);
        }
        Ok(warnings)
    }

    pub fn screen(&self, index: usize) -> Option<&Screen> {
        self.screens.get(index)
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }
}

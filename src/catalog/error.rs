//! Catalog-specific error types.

use std::path::PathBuf;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse catalog contents
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    /// Catalog file extension is not yml, yaml or json
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Registry contains more than one "all" bucket
    #[error("Registry has more than one unfiltered category (second is '{label}')")]
    MultipleAllCategories { label: String },

    /// Registry repeats a category id
    #[error("Duplicate category id: {id}")]
    DuplicateCategory { id: String },

    /// Screen repeats an item key
    #[error("Duplicate item key '{key}' on screen '{screen}'")]
    DuplicateItem { screen: String, key: String },

    /// Item references a category missing from its screen's registry
    #[error("Item '{key}' on screen '{screen}' references unknown category '{category}'")]
    UnknownCategory {
        screen: String,
        key: String,
        category: String,
    },

    /// Catalog repeats a screen id
    #[error("Duplicate screen id: {0}")]
    DuplicateScreen(String),

    /// Catalog has no screens
    #[error("Catalog '{0}' has no screens")]
    Empty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let error = CatalogError::DuplicateCategory {
            id: "food".to_string(),
        };
        assert!(error.to_string().contains("Duplicate category id: food"));

        let error = CatalogError::UnknownCategory {
            screen: "events".to_string(),
            key: "gala".to_string(),
            category: "galas".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("gala"));
        assert!(error_str.contains("events"));
        assert!(error_str.contains("galas"));

        let error = CatalogError::Empty("club".to_string());
        assert!(error.to_string().contains("no screens"));
    }

    #[test]
    fn test_catalog_error_with_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "Not found");
        let error = CatalogError::ReadFailed {
            path: PathBuf::from("/tmp/catalog.yml"),
            source: io_error,
        };
        assert!(error.to_string().contains("/tmp/catalog.yml"));
    }
}

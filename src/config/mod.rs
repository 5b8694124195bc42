//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! theme, skin, catalog location, validation strictness, accordion policy
//! and hotkey overrides.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, Keymap};

use crate::catalog::Skin;
use crate::error::AppError;
use crate::state::NestedExpansion;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/creator-market";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub skin: Skin,
    pub catalog_path: Option<PathBuf>,
    pub strict_categories: bool,
    pub nested_expansion: NestedExpansion,
    pub hotkeys: Keymap,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub skin: Skin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub strict_categories: bool,
    #[serde(default)]
    pub nested_expansion: NestedExpansion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkeys: Option<Keymap>,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            skin: Skin::default(),
            catalog_path: None,
            strict_categories: false,
            nested_expansion: NestedExpansion::default(),
            hotkeys: Keymap::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            debug!("Reading configuration from {}...", file_path.display());
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            self.apply(&contents)?;
        } else {
            debug!(
                "No configuration at {}, using defaults",
                file_path.display()
            );
        }
        self.file_path = Some(file_path);

        Ok(())
    }

    /// Replace settings with those parsed from YAML `contents`.
    ///
    fn apply(&mut self, contents: &str) -> Result<(), ConfigError> {
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        self.theme_name = data.theme_name;
        self.skin = data.skin;
        self.catalog_path = data.catalog_path;
        self.strict_categories = data.strict_categories;
        self.nested_expansion = data.nested_expansion;
        self.hotkeys = match data.hotkeys {
            Some(custom) => custom.merged_over_defaults(),
            None => Keymap::default(),
        };
        Ok(())
    }

    /// Serialize the configuration and write it to disk, creating the
    /// directory if needed.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            skin: self.skin,
            catalog_path: self.catalog_path.clone(),
            strict_categories: self.strict_categories,
            nested_expansion: self.nested_expansion,
            hotkeys: if self.hotkeys == Keymap::default() {
                None
            } else {
                Some(self.hotkeys.clone())
            },
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        info!("Saved configuration to {}", file_path.display());
        Ok(())
    }

    /// Persist `theme_name` into the configuration file, leaving every other
    /// stored setting as it is on disk. Settings overridden in memory for a
    /// single run are not written.
    ///
    pub fn save_theme(&self, theme_name: &str) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let mut stored = Config::new();
        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            stored.apply(&contents)?;
        }
        stored.file_path = Some(file_path.clone());
        stored.theme_name = theme_name.to_string();
        stored.save()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::hotkeys::Hotkey;

    #[test]
    fn load_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.skin, Skin::Marketplace);
        assert!(!config.strict_categories);
        assert_eq!(config.nested_expansion, NestedExpansion::Preserve);
        assert_eq!(config.file_path(), Some(dir.path().join(FILE_NAME).as_path()));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "theme_name: dracula\nskin: club\nstrict_categories: true\nnested_expansion: reset\n\
             hotkeys:\n  browse:\n    quit:\n      code: Esc\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "dracula");
        assert_eq!(config.skin, Skin::Club);
        assert!(config.strict_categories);
        assert_eq!(config.nested_expansion, NestedExpansion::Reset);
        assert_eq!(
            config.hotkeys.browse.get(&HotkeyAction::Quit),
            Some(&Hotkey::plain(crossterm::event::KeyCode::Esc))
        );
        assert!(config.hotkeys.browse.contains_key(&HotkeyAction::NavigateNext));
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "skin: [not, a, skin]\n").unwrap();
        let mut config = Config::new();
        let result = config.load(dir.path().to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn save_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let mut config = Config::new();
        config.load(nested.to_str()).unwrap();
        config.theme_name = "rose-pine".to_string();
        config.skin = Skin::Club;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(nested.to_str()).unwrap();
        assert_eq!(reloaded.theme_name, "rose-pine");
        assert_eq!(reloaded.skin, Skin::Club);
        assert_eq!(reloaded.hotkeys, Keymap::default());
    }

    #[test]
    fn save_theme_keeps_run_overrides_out_of_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme_name: dracula\nskin: marketplace\n").unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.skin = Skin::Club;
        config.catalog_path = Some(PathBuf::from("/tmp/one-off.yml"));
        config.strict_categories = true;
        config.save_theme("rose-pine").unwrap();

        let mut next_launch = Config::new();
        next_launch.load(dir.path().to_str()).unwrap();
        assert_eq!(next_launch.theme_name, "rose-pine");
        assert_eq!(next_launch.skin, Skin::Marketplace);
        assert_eq!(next_launch.catalog_path, None);
        assert!(!next_launch.strict_categories);
    }

    #[test]
    fn save_theme_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.skin = Skin::Club;
        config.save_theme("dracula").unwrap();

        let mut next_launch = Config::new();
        next_launch.load(dir.path().to_str()).unwrap();
        assert_eq!(next_launch.theme_name, "dracula");
        assert_eq!(next_launch.skin, Skin::Marketplace);
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}

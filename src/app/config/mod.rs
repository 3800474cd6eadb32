// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[grid]` - Column count, spacing, draggability and test identifiers
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_TILES_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_tiles::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.grid.columns = Some(4);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::grid::{Draggable, GridItem, Settings};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Grid behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,

    /// Gap between tiles and around the grid.
    #[serde(default = "default_spacing", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,

    /// Whether tiles can be dragged at all.
    #[serde(default = "default_draggable", skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,

    /// Tile ids that never start a drag.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locked: Vec<String>,

    /// Prefix for per-tile test identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id_prefix: Option<String>,

    /// Fixed grid width. When set, window resizes no longer affect the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_width: Option<f32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            spacing: default_spacing(),
            draggable: default_draggable(),
            locked: Vec::new(),
            test_id_prefix: None,
            fixed_width: None,
        }
    }
}

impl GridConfig {
    /// Column count, clamped to the accepted range.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    /// Spacing, clamped to the accepted range. Non-finite values fall back
    /// to the default.
    #[must_use]
    pub fn spacing(&self) -> f32 {
        match self.spacing {
            Some(value) if value.is_finite() => value.clamp(MIN_SPACING, MAX_SPACING),
            _ => DEFAULT_SPACING,
        }
    }

    /// Builds grid settings. A non-empty `locked` list turns draggability
    /// into a per-item predicate.
    #[must_use]
    pub fn grid_settings<T: GridItem + 'static>(&self) -> Settings<T> {
        let enabled = self.draggable.unwrap_or(DEFAULT_DRAGGABLE);
        let draggable = if enabled && !self.locked.is_empty() {
            let locked: HashSet<String> = self.locked.iter().cloned().collect();
            Draggable::predicate(move |item: &T| !locked.contains(item.id()))
        } else {
            Draggable::Fixed(enabled)
        };

        Settings {
            columns: self.columns(),
            spacing: self.spacing(),
            draggable,
            test_id_prefix: self.test_id_prefix.clone(),
            fixed_width: self.fixed_width.filter(|width| *width > 0.0),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_columns() -> Option<usize> {
    Some(DEFAULT_COLUMNS)
}

fn default_spacing() -> Option<f32> {
    Some(DEFAULT_SPACING)
}

fn default_draggable() -> Option<bool> {
    Some(DEFAULT_DRAGGABLE)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[derive(Debug, Clone)]
    struct Card(&'static str);

    impl GridItem for Card {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            grid: GridConfig {
                columns: Some(4),
                spacing: Some(8.0),
                draggable: Some(true),
                locked: vec!["pinned".to_string()],
                test_id_prefix: Some("tile".to_string()),
                fixed_width: Some(640.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.grid, GridConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unreadable_file_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[grid]\ncolumns = \"x\"\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("failed to save");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let grid = GridConfig {
            columns: Some(0),
            spacing: Some(-5.0),
            ..GridConfig::default()
        };
        assert_eq!(grid.columns(), MIN_COLUMNS);
        assert_eq!(grid.spacing(), MIN_SPACING);

        let grid = GridConfig {
            columns: Some(99),
            spacing: Some(f32::NAN),
            ..GridConfig::default()
        };
        assert_eq!(grid.columns(), MAX_COLUMNS);
        assert_eq!(grid.spacing(), DEFAULT_SPACING);
    }

    #[test]
    fn locked_ids_become_predicate() {
        let grid = GridConfig {
            locked: vec!["pinned".to_string()],
            ..GridConfig::default()
        };
        let settings: Settings<Card> = grid.grid_settings();
        assert!(settings.draggable.allows(&Card("free")));
        assert!(!settings.draggable.allows(&Card("pinned")));
    }

    #[test]
    fn disabled_dragging_ignores_locked_list() {
        let grid = GridConfig {
            draggable: Some(false),
            locked: vec!["pinned".to_string()],
            ..GridConfig::default()
        };
        let settings: Settings<Card> = grid.grid_settings();
        assert!(!settings.draggable.allows(&Card("free")));
    }

    #[test]
    fn non_positive_fixed_width_is_ignored() {
        let grid = GridConfig {
            fixed_width: Some(0.0),
            ..GridConfig::default()
        };
        let settings: Settings<Card> = grid.grid_settings();
        assert_eq!(settings.fixed_width, None);
    }
}

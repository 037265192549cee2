//! Application configuration.
//!
//! Settings are read from an optional `config.toml` in the platform config
//! directory. A missing file is not an error; a malformed one falls back to
//! defaults with a logged warning at the call site.

use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;

/// Theme selection from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the operating system setting
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve the preference to a concrete dark-or-light choice
    pub fn is_dark(&self) -> bool {
        match self {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => matches!(dark_light::detect(), dark_light::Mode::Dark),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemePreference,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, falling back to defaults
    /// when no config file exists.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "mentor-connect")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme, ThemePreference::System);
        assert_eq!(config.window_width, 1280.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"\nwindow_width = 1024.0").unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.window_width, 1024.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.window_height, 800.0);
    }

    #[test]
    fn test_load_from_rejects_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = ").unwrap();
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_explicit_preferences_ignore_system() {
        assert!(!ThemePreference::Light.is_dark());
        assert!(ThemePreference::Dark.is_dark());
    }
}

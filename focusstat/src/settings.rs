//! Persisted settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::render::OutputStyle;

/// Default log filter when neither RUST_LOG nor settings provide one
pub const DEFAULT_LOG_FILTER: &str = "focusstat=warn,focus_status=warn";

/// User settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Markup style used when no --style flag is given
    #[serde(default)]
    pub style: OutputStyle,
    /// Log filter directive, used when RUST_LOG is unset
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Settings {
    /// Get the XDG config directory for focusstat
    /// Uses $XDG_CONFIG_HOME/focusstat, falls back to ~/.config/focusstat
    fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config);
            if path.is_absolute() {
                return Some(path.join("focusstat"));
            }
        }

        dirs::home_dir().map(|h| h.join(".config").join("focusstat"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::settings_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    ///
    /// A missing or malformed file yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create settings directory {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("failed to serialize settings")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;

        Ok(())
    }

    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("focusstat-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&scratch_path("missing"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.style, OutputStyle::Tags);
        assert_eq!(settings.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path("save");
        let settings = Settings {
            style: OutputStyle::Ansi,
            log_filter: Some("focusstat=debug".to_string()),
        };

        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"style":"plain"}"#).unwrap();
        assert_eq!(settings.style, OutputStyle::Plain);
        assert_eq!(settings.log_filter, None);
    }
}

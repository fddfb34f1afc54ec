// ABOUTME: Persisted appearance preference: mode selection and custom seed color
// ABOUTME: One JSON file under the user config dir, read once at startup

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tinct_logging::warn;
use tinct_types::ThemeMode;

/// Which appearance the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    /// Follow the system color scheme.
    Auto,
    Light,
    #[default]
    Dark,
}

impl ModePreference {
    /// Resolve against the current system scheme.
    pub fn resolve(self, system: ThemeMode) -> ThemeMode {
        match self {
            ModePreference::Auto => system,
            ModePreference::Light => ThemeMode::Light,
            ModePreference::Dark => ThemeMode::Dark,
        }
    }
}

/// The persisted appearance state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppearancePreference {
    #[serde(default)]
    pub mode: ModePreference,
    /// Seed color of the custom theme, when one has been applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_seed: Option<String>,
}

impl AppearancePreference {
    pub fn has_custom_theme(&self) -> bool {
        self.custom_seed.is_some()
    }
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode preference: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store for [`AppearancePreference`].
///
/// Loading is forgiving: a missing or unreadable file yields the default
/// preference, since appearance state must never block startup. Saving
/// reports errors so callers can decide whether to surface them.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store at the default location, `<config dir>/tinct/appearance.json`.
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join("tinct").join("appearance.json"))
            .unwrap_or_else(|| PathBuf::from("appearance.json"));
        Self { path }
    }

    /// Store at an explicit path. Tests use this with a temp directory.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted preference, falling back to the default on any
    /// failure.
    pub fn load(&self) -> AppearancePreference {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return AppearancePreference::default();
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "could not read appearance preference");
                return AppearancePreference::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(preference) => preference,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "malformed appearance preference, using defaults");
                AppearancePreference::default()
            }
        }
    }

    pub fn save(&self, preference: &AppearancePreference) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(preference)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_default() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::with_path(dir.path().join("appearance.json"));
        assert_eq!(store.load(), AppearancePreference::default());
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::with_path(dir.path().join("nested").join("appearance.json"));
        let preference = AppearancePreference {
            mode: ModePreference::Light,
            custom_seed: Some("#ff7a00".into()),
        };
        store.save(&preference).unwrap();
        assert_eq!(store.load(), preference);
    }

    #[test]
    fn malformed_file_yields_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appearance.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = PreferenceStore::with_path(&path);
        assert_eq!(store.load(), AppearancePreference::default());
    }

    #[test]
    fn mode_preference_resolution() {
        assert_eq!(
            ModePreference::Auto.resolve(ThemeMode::Light),
            ThemeMode::Light
        );
        assert_eq!(
            ModePreference::Auto.resolve(ThemeMode::Dark),
            ThemeMode::Dark
        );
        assert_eq!(
            ModePreference::Light.resolve(ThemeMode::Dark),
            ThemeMode::Light
        );
        assert_eq!(
            ModePreference::Dark.resolve(ThemeMode::Light),
            ThemeMode::Dark
        );
    }

    #[test]
    fn custom_seed_omitted_when_absent() {
        let json = serde_json::to_string(&AppearancePreference::default()).unwrap();
        assert!(!json.contains("custom_seed"));
    }
}

use crate::error::{FolioError, Result};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Option<ThemeMode>,
    pub last_fragment: Option<String>,
}

pub fn get_preferences_path() -> Option<PathBuf> {
    super::config::config_dir().map(|dir| dir.join("preferences.toml"))
}

pub fn load_preferences(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| FolioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| FolioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_preferences(path: &Path, prefs: &Preferences) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| FolioError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let content = toml::to_string(prefs)?;
    std::fs::write(path, content).map_err(|source| FolioError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Preferences plus where they live. Without a path (no home directory)
/// everything stays in memory.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    pub prefs: Preferences,
}

impl PreferenceStore {
    /// Unreadable preferences are logged and replaced by defaults.
    #[must_use]
    pub fn open(path: Option<PathBuf>) -> Self {
        let prefs = match path.as_deref().map(load_preferences) {
            Some(Ok(prefs)) => prefs,
            Some(Err(err)) => {
                warn!(error = %err, "ignoring unreadable preferences");
                Preferences::default()
            }
            None => Preferences::default(),
        };
        Self { path, prefs }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        if self.prefs.theme != Some(theme) {
            self.prefs.theme = Some(theme);
            self.persist();
        }
    }

    pub fn set_fragment(&mut self, fragment: &str) {
        if self.prefs.last_fragment.as_deref() != Some(fragment) {
            self.prefs.last_fragment = Some(fragment.to_string());
            self.persist();
        }
    }

    fn persist(&self) {
        if let Some(path) = &self.path {
            if let Err(err) = save_preferences(path, &self.prefs) {
                warn!(error = %err, "failed to save preferences");
            }
        }
    }
}

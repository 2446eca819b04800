use crate::domain::catalog::DEFAULT_PAGE_SIZE;
use crate::error::{FolioError, Result};
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TOML profile replacing the built-in one.
    pub profile_path: Option<PathBuf>,
    pub page_size: usize,
    /// Rows scrolled before the "back to top" badge appears.
    pub back_to_top_threshold: u16,
    pub toast_ttl_ms: u64,
    /// Used when no theme preference has been saved yet.
    pub default_theme: Option<ThemeMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            back_to_top_threshold: 12,
            toast_ttl_ms: 3000,
            default_theme: None,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("folio");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    /// An explicit path must exist. The default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => match get_config_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| FolioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 3\ndefault_theme = \"light\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.default_theme, Some(ThemeMode::Light));
        assert_eq!(config.toast_ttl(), Duration::from_secs(3));
        assert_eq!(config.back_to_top_threshold, 12);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, FolioError::Read { .. }));
    }

    #[test]
    fn test_bad_theme_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_theme = \"sepia\"").unwrap();
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, FolioError::Parse { .. }));
    }
}

//! Unified path management for UniStudy files.
//!
//! All configuration and durable data live under the platform config
//! directory (XDG on Linux, the appropriate equivalent elsewhere):
//!
//! ```text
//! ~/.config/unistudy/
//! ├── config.toml          # Application configuration
//! └── saved_items.json     # Persisted saved Q&A items
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find configuration directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for UniStudy.
pub struct StudyPaths;

impl StudyPaths {
    /// Returns the UniStudy configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("unistudy"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the saved-item store.
    pub fn saved_items_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("saved_items.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = StudyPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("unistudy"));
    }

    #[test]
    fn test_config_file_under_config_dir() {
        let config_file = StudyPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(StudyPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_saved_items_file_under_config_dir() {
        let saved = StudyPaths::saved_items_file().unwrap();
        assert!(saved.ends_with("saved_items.json"));
        assert!(saved.starts_with(StudyPaths::config_dir().unwrap()));
    }
}

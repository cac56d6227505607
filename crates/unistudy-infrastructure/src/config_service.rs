//! Configuration loading and persistence.

use std::fs;
use std::path::PathBuf;

use unistudy_core::config::StudyConfig;
use unistudy_core::error::{Result, StudyError};

use crate::paths::StudyPaths;

/// Loads and saves the `config.toml` for UniStudy.
///
/// A missing file yields defaults (and is written back so the user has
/// something to edit). A *malformed* file is an error: unlike the
/// saved-item store, configuration is user-authored and silently ignoring
/// it would mask typos.
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Creates a service pointing at the default platform location.
    pub fn default_location() -> Result<Self> {
        let path = StudyPaths::config_file()
            .map_err(|e| StudyError::config(format!("Failed to resolve config path: {}", e)))?;
        Ok(Self::new(path))
    }

    /// Loads the configuration, creating the file with defaults if absent.
    pub fn load(&self) -> Result<StudyConfig> {
        if !self.path.exists() {
            let config = StudyConfig::default();
            self.save(&config)?;
            tracing::info!("Created default config at {:?}", self.path);
            return Ok(config);
        }

        let content = fs::read_to_string(&self.path)?;
        let config: StudyConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration back to disk.
    pub fn save(&self, config: &StudyConfig) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(config)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

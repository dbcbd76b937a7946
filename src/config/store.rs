//! Configuration persistence.
//!
//! The configuration lives in one small JSON file. It is loaded once at
//! startup and explicitly saved on every change; a missing or corrupt file
//! is replaced by defaults and immediately re-persisted, so the application
//! always starts with a valid, on-disk configuration.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// A path-bound JSON store for [`EngineConfig`].
///
/// # Example
///
/// ```no_run
/// use timeclock_engine::config::ConfigStore;
///
/// let store = ConfigStore::new("config.json");
/// let config = store.load_or_default();
/// println!("daily quota: {}", config.quota_display());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store bound to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> ConfigStore {
        ConfigStore { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, validating its values.
    pub fn load(&self) -> EngineResult<EngineConfig> {
        let path_str = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration, substituting defaults on any failure.
    ///
    /// A missing, unreadable, unparseable, or out-of-range file is replaced
    /// by the default configuration, which is immediately re-persisted
    /// (best effort) so the next startup reads a clean file.
    pub fn load_or_default(&self) -> EngineConfig {
        match self.load() {
            Ok(config) => {
                debug!(path = %self.path.display(), "configuration loaded");
                config
            }
            Err(error) => {
                warn!(%error, "configuration unusable, falling back to defaults");
                let defaults = EngineConfig::default();
                if let Err(save_error) = self.save(&defaults) {
                    warn!(error = %save_error, "could not re-persist default configuration");
                }
                defaults
            }
        }
    }

    /// Writes the configuration as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, config: &EngineConfig) -> EngineResult<()> {
        let path_str = self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| EngineError::ConfigWriteError {
                    path: path_str.clone(),
                    message: e.to_string(),
                })?;
            }
        }

        let json =
            serde_json::to_string_pretty(config).map_err(|e| EngineError::ConfigWriteError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, json).map_err(|e| EngineError::ConfigWriteError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Replaces the configuration with new values.
    ///
    /// Both fields are validated before anything is persisted, so an invalid
    /// update leaves the stored file untouched. On success the new snapshot
    /// is returned; the caller is expected to follow up with a full table
    /// recalculation.
    pub fn update(
        &self,
        daily_quota_hours: Decimal,
        overtime_multiplier: Decimal,
    ) -> EngineResult<EngineConfig> {
        let candidate = EngineConfig {
            daily_quota_hours,
            overtime_multiplier,
        };
        candidate.validate()?;
        self.save(&candidate)?;
        debug!(path = %self.path.display(), "configuration updated");
        Ok(candidate)
    }
}

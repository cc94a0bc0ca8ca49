//! Shared configuration storage.
//!
//! Holds the active config behind a lock so the task transport sees a
//! reload without being rebuilt.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::{Config, ConfigOverrides};

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
    overrides: ConfigOverrides,
}

impl ConfigStore {
    /// Create a store from an already loaded config.
    ///
    /// `overrides` are applied now and again after every reload.
    pub fn new(mut config: Config, path: PathBuf, overrides: ConfigOverrides) -> Self {
        overrides.apply(&mut config);
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
            overrides,
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let mut config = Config::load_from(&self.path)?;
        self.overrides.apply(&mut config);
        config.validate()?;
        *self.inner.write() = config;
        tracing::info!(path = %self.path.display(), "Configuration reloaded");
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

//! Configuration loading.
//!
//! Reads `config.toml` from an explicit path or from the platform config
//! directory (`~/.config/branchit/config.toml` on Linux). A missing file is
//! not an error: the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use branchit_core::config::RootConfig;
use branchit_core::{BranchitError, Result};

/// Loads [`RootConfig`] from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Creates a service reading the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::default_config_path()?,
        })
    }

    /// Creates a service reading a custom path (CLI flag, tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] No config at {:?}, using defaults",
                self.path
            );
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let config = RootConfig::from_toml_str(&content)?;
        tracing::info!("[ConfigService] Loaded config from {:?}", self.path);
        Ok(config)
    }

    /// Gets the default config path (`<config_dir>/branchit/config.toml`).
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("branchit").join("config.toml"))
            .ok_or_else(|| BranchitError::config("Cannot find config directory"))
    }
}

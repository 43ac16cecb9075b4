//! Path management for FinTooz
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `FINTOOZ_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fintooz` or `~/.config/fintooz`
//! 3. Windows: `%APPDATA%\fintooz`

use std::path::PathBuf;

use crate::error::FinError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINTOOZ_DATA_DIR";

/// Manages all paths used by FinTooz
#[derive(Debug, Clone)]
pub struct FinPaths {
    /// Base directory for all FinTooz data
    base_dir: PathBuf,
}

impl FinPaths {
    /// Create a new FinPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fintooz/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/fintooz/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path of the lock file held while a command runs
    pub fn lock_file(&self) -> PathBuf {
        self.data_dir().join("transactions.lock")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if FinTooz has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| FinError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("fintooz"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fintooz"))
}

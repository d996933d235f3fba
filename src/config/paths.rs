//! Path management for the stokvel ledger
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag or `STOKVEL_DATA_DIR`)
//! 2. The current working directory
//!
//! The database, settings file, and audit log all live directly in the base
//! directory. CSV exports default to the base directory as well.

use std::path::{Path, PathBuf};

use crate::error::StokvelError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STOKVEL_DATA_DIR";

/// Manages all paths used by the stokvel ledger
#[derive(Debug, Clone)]
pub struct StokvelPaths {
    /// Base directory for all ledger data
    base_dir: PathBuf,
}

impl StokvelPaths {
    /// Create a new StokvelPaths instance
    ///
    /// Uses `STOKVEL_DATA_DIR` when set, otherwise the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, StokvelError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                StokvelError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create StokvelPaths with a custom base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("stokvel.db")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Default directory for CSV exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), StokvelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StokvelError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a database has been created in this directory
    pub fn is_initialized(&self) -> bool {
        self.database_file().exists()
    }
}

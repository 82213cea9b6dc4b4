//! Store configuration via `mimic.toml`
//!
//! A simple config file in the data directory. On first open, a default
//! `mimic.toml` is created. To change settings, edit the file and reopen.

use mimic_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the store data directory.
pub const CONFIG_FILE_NAME: &str = "mimic.toml";

/// How hard a save pushes bytes to stable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// Atomic rename without fsync. A crash may lose the last save but
    /// never leaves a torn document.
    Standard,
    /// fsync the temp file and the directory before declaring success.
    Always,
}

/// Store configuration loaded from `mimic.toml`.
///
/// # Example
///
/// ```toml
/// # Durability mode: "standard" (default) or "always"
/// durability = "standard"
///
/// # Pretty-print the persisted document (default: true)
/// pretty = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Durability mode: `"standard"` or `"always"`.
    #[serde(default = "default_durability_str")]
    pub durability: String,
    /// Pretty-print `db.json` so it stays hand-inspectable.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_durability_str() -> String {
    "standard".to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            durability: default_durability_str(),
            pretty: default_pretty(),
        }
    }
}

impl StoreConfig {
    /// Parse the durability string into a [`Durability`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"standard"` or `"always"`.
    pub fn durability_mode(&self) -> Result<Durability> {
        match self.durability.as_str() {
            "standard" => Ok(Durability::Standard),
            "always" => Ok(Durability::Always),
            other => Err(Error::internal(format!(
                "Invalid durability mode '{}' in mimic.toml. Expected \"standard\" or \"always\".",
                other
            ))),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Mimic store configuration
#
# Durability mode: "standard" (default) or "always"
#   "standard" = atomic rename only, a crash may lose the last save
#   "always"   = fsync file and directory on every save
durability = "standard"

# Pretty-print the persisted document (default: true).
# Set to false for compact single-line output.
pretty = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::internal(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            Error::internal(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the durability value eagerly
        config.durability_mode()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::internal(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

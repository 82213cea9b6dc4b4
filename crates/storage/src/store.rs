//! Document store: whole-tree load and save
//!
//! The store owns the single document backing the interface. Every public
//! operation is a load, zero or more in-memory mutations, and one save;
//! the store serializes those cycles so concurrent callers cannot lose
//! each other's writes. Saves replace the whole tree, last writer wins.
//!
//! ## Crash Safety
//!
//! Disk saves follow the write-fsync-rename pattern:
//! 1. Write to a temporary file (`.db.json.tmp`)
//! 2. fsync the temporary file (durability `"always"` only)
//! 3. Atomic rename to `db.json`
//! 4. fsync the parent directory (durability `"always"` only)
//!
//! Either the complete new document is visible or the previous one still
//! is; a torn file is never observable. A leftover temp file from a crash
//! is simply overwritten by the next save.

use crate::config::{Durability, StoreConfig, CONFIG_FILE_NAME};
use crate::seed::seed_document;
use mimic_core::{Document, Error, Result};
use parking_lot::{Mutex, RwLock};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Persisted document file name inside the data directory.
pub const DB_FILE_NAME: &str = "db.json";

const DB_TEMP_NAME: &str = ".db.json.tmp";

/// Controls where the document lives.
enum Backend {
    /// No disk files at all; the document exists only in memory.
    /// For tests and demos. Data is lost when the store is dropped.
    Ephemeral(RwLock<Document>),
    /// Document stored as `db.json` inside the data directory.
    Disk { dir: PathBuf },
}

/// The document store.
///
/// Two backends share one interface: [`DocumentStore::open`] persists the
/// tree under a data directory, [`DocumentStore::ephemeral`] keeps it in
/// memory. Both seed themselves on construction, so a fresh store always
/// serves the full fixture dataset.
pub struct DocumentStore {
    backend: Backend,
    config: StoreConfig,
    durability: Durability,
    /// Serializes every load-mutate-save cycle.
    cycle: Mutex<()>,
}

impl DocumentStore {
    /// Open (or create) a disk-backed store in `dir`.
    ///
    /// Creates the directory, writes a default `mimic.toml` if missing,
    /// and installs the seed document if no `db.json` exists yet.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            Error::internal(format!(
                "Failed to create data directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        StoreConfig::write_default_if_missing(&config_path)?;
        let config = StoreConfig::from_file(&config_path)?;
        Self::open_with(dir, config)
    }

    /// Open a disk-backed store with an explicit configuration, ignoring
    /// any `mimic.toml` in the directory.
    pub fn open_with(dir: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| {
            Error::internal(format!(
                "Failed to create data directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let durability = config.durability_mode()?;
        let store = DocumentStore {
            backend: Backend::Disk {
                dir: dir.to_path_buf(),
            },
            config,
            durability,
            cycle: Mutex::new(()),
        };
        store.ensure_seeded()?;
        Ok(store)
    }

    /// An in-memory store pre-loaded with the seed document.
    pub fn ephemeral() -> Self {
        DocumentStore {
            backend: Backend::Ephemeral(RwLock::new(seed_document())),
            config: StoreConfig::default(),
            durability: Durability::Standard,
            cycle: Mutex::new(()),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Data directory for disk-backed stores, `None` for ephemeral ones.
    pub fn data_dir(&self) -> Option<&Path> {
        match &self.backend {
            Backend::Ephemeral(_) => None,
            Backend::Disk { dir } => Some(dir),
        }
    }

    fn ensure_seeded(&self) -> Result<()> {
        self.load().map(|_| ())
    }

    /// Read the whole document.
    ///
    /// A missing file is seeded on the spot; an unparseable file is reset
    /// to the seed with a warning. Neither case is an error: the store
    /// favors coming back up over preserving corrupt bytes.
    pub fn load(&self) -> Result<Document> {
        match &self.backend {
            Backend::Ephemeral(slot) => Ok(slot.read().clone()),
            Backend::Disk { dir } => {
                let db_path = dir.join(DB_FILE_NAME);
                let content = match fs::read_to_string(&db_path) {
                    Ok(content) => content,
                    Err(e) if e.kind() == ErrorKind::NotFound => {
                        info!(path = %db_path.display(), "no stored document, installing seed");
                        let fresh = seed_document();
                        self.save(&fresh)?;
                        return Ok(fresh);
                    }
                    Err(e) => {
                        return Err(Error::Io {
                            reason: format!("Failed to read '{}': {}", db_path.display(), e),
                        })
                    }
                };
                match serde_json::from_str(&content) {
                    Ok(doc) => Ok(doc),
                    Err(e) => {
                        warn!(
                            path = %db_path.display(),
                            error = %e,
                            "stored document failed to parse, resetting to seed"
                        );
                        let fresh = seed_document();
                        self.save(&fresh)?;
                        Ok(fresh)
                    }
                }
            }
        }
    }

    /// Replace the whole document.
    pub fn save(&self, doc: &Document) -> Result<()> {
        match &self.backend {
            Backend::Ephemeral(slot) => {
                *slot.write() = doc.clone();
                Ok(())
            }
            Backend::Disk { dir } => self.write_disk(dir, doc),
        }
    }

    fn write_disk(&self, dir: &Path, doc: &Document) -> Result<()> {
        let final_path = dir.join(DB_FILE_NAME);
        let temp_path = dir.join(DB_TEMP_NAME);

        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(doc)?
        } else {
            serde_json::to_vec(doc)?
        };

        // Step 1: write to the temporary file
        let mut file = File::create(&temp_path).map_err(|e| Error::Io {
            reason: format!("Failed to create '{}': {}", temp_path.display(), e),
        })?;
        file.write_all(&bytes).map_err(|e| Error::Io {
            reason: format!("Failed to write '{}': {}", temp_path.display(), e),
        })?;

        // Step 2: fsync the file when durability demands it
        if self.durability == Durability::Always {
            file.sync_all().map_err(|e| Error::Io {
                reason: format!("Failed to sync '{}': {}", temp_path.display(), e),
            })?;
        }
        drop(file);

        // Step 3: atomic rename
        fs::rename(&temp_path, &final_path).map_err(|e| Error::Io {
            reason: format!("Failed to rename into '{}': {}", final_path.display(), e),
        })?;

        // Step 4: fsync the parent directory
        if self.durability == Durability::Always {
            let handle = File::open(dir).map_err(|e| Error::Io {
                reason: format!("Failed to open '{}': {}", dir.display(), e),
            })?;
            handle.sync_all().map_err(|e| Error::Io {
                reason: format!("Failed to sync '{}': {}", dir.display(), e),
            })?;
        }
        Ok(())
    }

    /// Run `f` against a freshly loaded document. Nothing is persisted.
    pub fn read<T>(&self, f: impl FnOnce(&Document) -> Result<T>) -> Result<T> {
        let _guard = self.cycle.lock();
        let doc = self.load()?;
        f(&doc)
    }

    /// Run `f` against a freshly loaded document and persist the result.
    ///
    /// The save happens only when `f` returns `Ok`; on `Err` the stored
    /// document is untouched. The whole cycle holds the store lock, so
    /// two racing updates cannot lose each other's changes.
    pub fn update<T>(&self, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let _guard = self.cycle.lock();
        let mut doc = self.load()?;
        let value = f(&mut doc)?;
        self.save(&doc)?;
        Ok(value)
    }

    /// Rewrite the seed document, discarding all changes.
    pub fn reset(&self) -> Result<()> {
        let _guard = self.cycle.lock();
        self.save(&seed_document())
    }
}

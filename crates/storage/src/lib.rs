//! Storage layer for MimicDB
//!
//! This crate implements whole-document persistence:
//! - DocumentStore: one JSON tree, loaded and saved as a unit
//! - Disk and ephemeral backends behind the same interface
//! - Implicit seeding and corruption fallback to the seed document
//! - Crash-safe write-fsync-rename saves
//! - `mimic.toml` configuration in the data directory

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod seed;
pub mod store;

pub use config::{Durability, StoreConfig, CONFIG_FILE_NAME};
pub use seed::seed_document;
pub use store::{DocumentStore, DB_FILE_NAME};

//! API Surface Test Suite
//!
//! Black-box coverage of every route the store answers, driven through
//! the public [`Mimic`] interface the way the original HTTP clients
//! drove the API: raw paths in, JSON bodies out.
//!
//! ## Modules
//!
//! - `account`: account record, team roster, the owner role guard
//! - `agents`: roster CRUD and its strict delete
//! - `chats`: dual-view reads, appends, workflow actions
//! - `knowledge`: groups, nested files, computed counts
//! - `models`: the read-only catalogue
//! - `routing`: URL normalization and unknown-route handling
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole surface
//! cargo test --test api_surface
//!
//! # Run one resource
//! cargo test --test api_surface chats::
//!
//! # Run with output
//! cargo test --test api_surface -- --nocapture
//! ```

use mimicdb::Mimic;

pub mod account;
pub mod agents;
pub mod chats;
pub mod knowledge;
pub mod models;
pub mod routing;

/// Fresh in-memory store carrying the full seed dataset.
pub fn db() -> Mimic {
    Mimic::ephemeral()
}

//! Error types for request execution.
//!
//! All errors surfaced by the store and executor are represented by the
//! [`Error`] enum. These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Two-tiered**: `NotFound` is the only domain error; everything else
//!   is an internal failure callers are not expected to branch on

use serde::{Deserialize, Serialize};

/// Result type alias for mimic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Request execution errors.
///
/// `NotFound` is the single expected failure mode of the public interface:
/// a path that addresses no resource. The remaining variants cover
/// infrastructure faults (disk, malformed JSON, violated invariants) and
/// carry their cause as a string so the enum stays serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Domain ====================
    /// No resource matches the requested verb and path
    #[error("not found: {target}")]
    NotFound { target: String },

    // ==================== System ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Serialization error (malformed payload or corrupt stored data)
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// Build a `NotFound` for the given target description.
    pub fn not_found(target: impl Into<String>) -> Self {
        Error::NotFound {
            target: target.into(),
        }
    }

    /// Build an `Internal` with the given reason.
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal {
            reason: reason.into(),
        }
    }

    /// True for the domain error, false for the internal-failure family.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

//! Draft storage port
//!
//! A synchronous string key/value store, the durable backend drafts are
//! written to.

use thiserror::Error;

/// Errors reported by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded writing {key}")]
    QuotaExceeded { key: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for durable draft storage
///
/// Implementations (adapters) live in the infrastructure layer. Calls are
/// synchronous and complete before returning; there is no queueing.
pub trait DraftStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

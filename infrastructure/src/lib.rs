//! Infrastructure layer for pollstream
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBuilderConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileStorageConfig,
};
pub use storage::{FileDraftStorage, MemoryDraftStorage};

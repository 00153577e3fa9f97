//! Storage adapters implementing the
//! [`DraftStorage`](pollstream_application::DraftStorage) port.
//!
//! - [`FileDraftStorage`]: one file per key in a directory
//! - [`MemoryDraftStorage`]: process-local map with an optional byte quota

mod file_storage;
mod memory_storage;

pub use file_storage::FileDraftStorage;
pub use memory_storage::MemoryDraftStorage;

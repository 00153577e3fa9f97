//! Storage configuration from TOML (`[storage]` section)

use pollstream_application::config::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Key prefix; drafts are stored under `<namespace>:<survey name>`
    pub namespace: String,
    /// Directory holding draft files (platform data dir when unset)
    pub dir: Option<PathBuf>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            dir: None,
        }
    }
}

impl FileStorageConfig {
    /// The configured directory, or `<data dir>/pollstream/drafts`.
    ///
    /// Falls back to `./.pollstream/drafts` when the platform has no data dir.
    pub fn resolve_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("pollstream").join("drafts"))
            .unwrap_or_else(|| PathBuf::from(".pollstream").join("drafts"))
    }
}

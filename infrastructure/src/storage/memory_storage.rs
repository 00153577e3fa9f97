//! Process-local key/value storage.

use pollstream_application::{DraftStorage, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory draft storage
///
/// Thread-safe via `Mutex`. An optional quota caps the total number of
/// stored bytes; a write that would exceed it fails with
/// [`StorageError::QuotaExceeded`] and leaves the old value in place.
#[derive(Default)]
pub struct MemoryDraftStorage {
    values: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryDraftStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes beyond `bytes` in total (keys and values).
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            values: Mutex::default(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DraftStorage for MemoryDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))?;

        if let Some(quota) = self.quota {
            let used: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if used + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollstream_application::{BuilderConfig, DraftRepository};
    use pollstream_domain::{Draft, Locale};
    use std::sync::Arc;

    #[test]
    fn test_set_get_replace() {
        let storage = MemoryDraftStorage::new();
        assert!(storage.is_empty());
        storage.set("a", "1").unwrap();
        storage.set("a", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.len(), 1);
        assert!(storage.get("b").unwrap().is_none());
    }

    #[test]
    fn test_quota_rejects_oversized_write_and_keeps_old_value() {
        let storage = MemoryDraftStorage::with_quota(8);
        storage.set("k", "1234").unwrap();
        assert!(matches!(
            storage.set("k", "123456789"),
            Err(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_repository_survives_full_storage() {
        let storage = Arc::new(MemoryDraftStorage::with_quota(16));
        let repo = DraftRepository::new(storage, &BuilderConfig::default(), "Full");
        let draft = Draft::with_default_page(Locale::Ru);

        assert!(!repo.save(&draft));
        assert!(repo.load().is_none());
        assert!(!repo.exists());
    }
}

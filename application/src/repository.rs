//! Draft repository: the persistence adapter between a [`Draft`] and a
//! [`DraftStorage`] backend.
//!
//! Every draft lives under a namespaced key (`"<namespace>:<survey name>"`).
//! Writes are best-effort: storage failures are logged and swallowed so the
//! in-memory draft stays authoritative for the rest of the session.

use crate::config::BuilderConfig;
use crate::ports::storage::DraftStorage;
use pollstream_domain::{DecodedRecord, Draft, Locale, decode_record, encode_record};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Namespaced draft persistence over a storage port.
pub struct DraftRepository<S: DraftStorage> {
    storage: Arc<S>,
    key: String,
    locale: Locale,
}

impl<S: DraftStorage> DraftRepository<S> {
    pub fn new(storage: Arc<S>, config: &BuilderConfig, survey_name: &str) -> Self {
        Self {
            storage,
            key: config.storage_key(survey_name),
            locale: config.locale,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    /// Write the full draft under the namespaced key.
    ///
    /// Returns whether the write reached storage; failures are never fatal.
    pub fn save(&self, draft: &Draft) -> bool {
        let text = match encode_record(draft) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not encode draft {}: {}", self.key, e);
                return false;
            }
        };

        match self.storage.set(&self.key, &text) {
            Ok(()) => {
                debug!("Saved draft {} ({} bytes)", self.key, text.len());
                true
            }
            Err(e) => {
                warn!("Could not save draft {}: {}", self.key, e);
                false
            }
        }
    }

    /// Read and decode the stored draft.
    ///
    /// Returns `None` when the key is missing, unreadable, or does not decode.
    /// A legacy single-page record is migrated and the migrated shape is
    /// written back immediately.
    pub fn load(&self) -> Option<Draft> {
        let text = self.read()?;

        match decode_record(&text, self.locale) {
            Ok(DecodedRecord::Current(draft)) => Some(draft),
            Ok(DecodedRecord::Migrated(draft)) => {
                info!("Migrated legacy draft {} to the paged format", self.key);
                self.save(&draft);
                Some(draft)
            }
            Err(e) => {
                warn!("Ignoring unreadable draft {}: {}", self.key, e);
                None
            }
        }
    }

    /// Whether anything is stored under the key, valid or not.
    ///
    /// A storage read failure counts as existing, so callers that must not
    /// overwrite user data never write blind.
    pub fn exists(&self) -> bool {
        match self.storage.get(&self.key) {
            Ok(Some(text)) => !text.is_empty(),
            Ok(None) => false,
            Err(e) => {
                warn!("Could not check for draft {}: {}", self.key, e);
                true
            }
        }
    }

    fn read(&self) -> Option<String> {
        match self.storage.get(&self.key) {
            Ok(Some(text)) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                warn!("Could not read draft {}: {}", self.key, e);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::storage::StorageError;
    use pollstream_domain::{LabelList, QuestionKind};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory storage with switchable failures.
    #[derive(Default)]
    pub(crate) struct FakeStorage {
        pub(crate) values: Mutex<HashMap<String, String>>,
        pub(crate) fail_reads: bool,
        pub(crate) fail_writes: bool,
    }

    impl FakeStorage {
        pub(crate) fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.put(key, value);
            storage
        }

        pub(crate) fn put(&self, key: &str, value: &str) {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        pub(crate) fn value(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }
    }

    impl DraftStorage for FakeStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Unavailable("reads disabled".to_string()));
            }
            Ok(self.value(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
            self.put(key, value);
            Ok(())
        }
    }

    pub(crate) const KEY: &str = "pollstream:builder:Test";

    fn repository(storage: FakeStorage) -> DraftRepository<FakeStorage> {
        DraftRepository::new(Arc::new(storage), &BuilderConfig::default(), "Test")
    }

    #[test]
    fn test_key_is_namespaced() {
        assert_eq!(repository(FakeStorage::default()).key(), KEY);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let repo = repository(FakeStorage::default());
        let mut draft = Draft::with_default_page(Locale::Ru);
        let q = draft
            .add_question(QuestionKind::ImageChoice, Locale::Ru)
            .unwrap();
        draft.add_label(&q, LabelList::Options, Locale::Ru).unwrap();
        draft.add_page(Some("Contacts"), false, Locale::Ru);

        assert!(repo.save(&draft));
        assert_eq!(repo.load(), Some(draft));
    }

    #[test]
    fn test_load_missing_or_invalid_is_absent() {
        assert!(repository(FakeStorage::default()).load().is_none());
        assert!(repository(FakeStorage::with(KEY, "{oops")).load().is_none());
        assert!(repository(FakeStorage::with(KEY, "42")).load().is_none());
        assert!(repository(FakeStorage::with(KEY, "")).load().is_none());
    }

    #[test]
    fn test_load_migrates_legacy_record_eagerly() {
        let legacy = json!({"questions": [{"id": "q1", "kind": "text"}]}).to_string();
        let repo = repository(FakeStorage::with(KEY, &legacy));

        let first = repo.load().unwrap();
        assert_eq!(first.pages().len(), 1);
        assert_eq!(first.current_questions()[0].id().as_str(), "q1");

        let stored: serde_json::Value =
            serde_json::from_str(&repo.storage().value(KEY).unwrap()).unwrap();
        assert!(stored.get("questions").is_none());
        assert!(stored["pages"].is_array());

        // The second load decodes the migrated record, not the legacy one.
        let second = repo.load().unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_exists_counts_corrupt_records() {
        assert!(!repository(FakeStorage::default()).exists());
        assert!(repository(FakeStorage::with(KEY, "{oops")).exists());
    }

    #[test]
    fn test_unavailable_storage_is_swallowed() {
        let repo = repository(FakeStorage {
            fail_reads: true,
            fail_writes: true,
            ..Default::default()
        });
        assert!(!repo.save(&Draft::with_default_page(Locale::Ru)));
        assert!(repo.load().is_none());
        assert!(repo.exists());
    }
}

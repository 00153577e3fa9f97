//! Bootstrap Template use case
//!
//! Seeds a draft from a template payload exactly once: only when nothing is
//! stored yet under the survey's key. A template never clobbers an
//! in-progress draft, not even a corrupt one.

use crate::ports::storage::DraftStorage;
use crate::repository::DraftRepository;
use pollstream_domain::decode_template;
use tracing::{debug, info, warn};

/// What the bootstrap step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No payload was supplied.
    NoTemplate,
    /// A record already exists under the key; nothing was written.
    AlreadyExists,
    /// The payload was malformed or had no pages; nothing was written.
    Rejected,
    /// The template was adopted and persisted.
    Seeded,
}

/// Use case for seeding a draft from a template payload
pub struct BootstrapTemplateUseCase<'a, S: DraftStorage> {
    repository: &'a DraftRepository<S>,
}

impl<'a, S: DraftStorage> BootstrapTemplateUseCase<'a, S> {
    pub fn new(repository: &'a DraftRepository<S>) -> Self {
        Self { repository }
    }

    /// Adopt `payload` as the initial draft if the key is still empty.
    pub fn execute(&self, payload: Option<&str>) -> BootstrapOutcome {
        let Some(payload) = payload.filter(|p| !p.trim().is_empty()) else {
            return BootstrapOutcome::NoTemplate;
        };

        if self.repository.exists() {
            debug!(
                "Draft {} already exists, skipping template",
                self.repository.key()
            );
            return BootstrapOutcome::AlreadyExists;
        }

        let locale = self.repository.locale();
        let mut draft = match decode_template(payload, locale) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Ignoring invalid template payload: {}", e);
                return BootstrapOutcome::Rejected;
            }
        };
        draft.normalize(locale);

        info!(
            "Seeded draft {} from template ({} pages)",
            self.repository.key(),
            draft.pages().len()
        );
        self.repository.save(&draft);
        BootstrapOutcome::Seeded
    }
}

//! Load Draft use case
//!
//! The ordinary startup path: restore the stored draft, or synthesize a
//! single default page when there is nothing usable. Either way the result
//! satisfies the draft invariants.

use crate::ports::storage::DraftStorage;
use crate::repository::DraftRepository;
use pollstream_domain::Draft;
use tracing::{debug, info};

/// Where a loaded draft came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOrigin {
    /// Restored from storage as-is.
    Restored,
    /// Restored from storage, then repaired and written back.
    Repaired,
    /// Nothing usable was stored; a default page was created.
    Synthesized,
}

/// Output of the LoadDraft use case
#[derive(Debug, Clone)]
pub struct LoadDraftOutput {
    pub draft: Draft,
    pub origin: DraftOrigin,
}

/// Use case for loading the draft at startup
pub struct LoadDraftUseCase<'a, S: DraftStorage> {
    repository: &'a DraftRepository<S>,
}

impl<'a, S: DraftStorage> LoadDraftUseCase<'a, S> {
    pub fn new(repository: &'a DraftRepository<S>) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> LoadDraftOutput {
        let locale = self.repository.locale();

        match self.repository.load() {
            Some(mut draft) => {
                let origin = if draft.normalize(locale) {
                    info!("Repaired stored draft {}", self.repository.key());
                    self.repository.save(&draft);
                    DraftOrigin::Repaired
                } else {
                    debug!("Restored draft {}", self.repository.key());
                    DraftOrigin::Restored
                };
                LoadDraftOutput { draft, origin }
            }
            None => {
                let draft = Draft::with_default_page(locale);
                // A corrupt record is left alone until the first real edit.
                if self.repository.exists() {
                    debug!("Unusable draft at {}, starting fresh", self.repository.key());
                } else {
                    debug!("No draft at {}, starting fresh", self.repository.key());
                    self.repository.save(&draft);
                }
                LoadDraftOutput {
                    draft,
                    origin: DraftOrigin::Synthesized,
                }
            }
        }
    }
}

//! Draft controller
//!
//! Owns the single draft instance of a builder session and exposes every
//! collaborator-facing operation. Each applied mutation is written to storage
//! and then rendered, in that order. Operations whose target does not exist
//! are silent no-ops; only a refused deletion of the last page produces a
//! [`Notice`].

use crate::ports::renderer::{DraftRenderer, Notice};
use crate::ports::storage::DraftStorage;
use crate::repository::DraftRepository;
use crate::use_cases::bootstrap_template::BootstrapTemplateUseCase;
use crate::use_cases::load_draft::LoadDraftUseCase;
use pollstream_domain::{
    Draft, DraftError, LabelList, Locale, Page, PageId, Question, QuestionId, QuestionKind,
};
use std::borrow::Cow;
use tracing::debug;

/// Controller holding the draft of one survey
pub struct DraftController<S: DraftStorage, R: DraftRenderer> {
    draft: Draft,
    repository: DraftRepository<S>,
    renderer: R,
}

impl<S: DraftStorage, R: DraftRenderer> DraftController<S, R> {
    /// Start a session: bootstrap from `template` if the key is still empty,
    /// load the draft, and render it once.
    pub fn open(repository: DraftRepository<S>, renderer: R, template: Option<&str>) -> Self {
        BootstrapTemplateUseCase::new(&repository).execute(template);
        let loaded = LoadDraftUseCase::new(&repository).execute();
        let controller = Self::new(loaded.draft, repository, renderer);
        controller.renderer.render(&controller.draft);
        controller
    }

    /// Wrap an already loaded draft. Nothing is written or rendered.
    pub fn new(draft: Draft, repository: DraftRepository<S>, renderer: R) -> Self {
        Self {
            draft,
            repository,
            renderer,
        }
    }

    // ==================== Queries ====================

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.draft.current_page()
    }

    pub fn current_questions(&self) -> &[Question] {
        self.draft.current_questions()
    }

    /// Display name of a question kind in the session locale.
    pub fn kind_label<'k>(&self, kind: &'k QuestionKind) -> Cow<'k, str> {
        self.locale().kind_label(kind)
    }

    pub fn locale(&self) -> Locale {
        self.repository.locale()
    }

    pub fn repository(&self) -> &DraftRepository<S> {
        &self.repository
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Redraw without mutating.
    pub fn render(&self) {
        self.renderer.render(&self.draft);
    }

    // ==================== Pages ====================

    pub fn add_page(&mut self, title: Option<&str>, make_current: bool) -> PageId {
        let id = self
            .draft
            .add_page(title, make_current, self.repository.locale());
        self.commit();
        id
    }

    /// Delete a page. Refused with a notice when it is the last one.
    pub fn delete_page(&mut self, id: &PageId) -> Option<Notice> {
        self.apply("delete_page", |draft, _| draft.delete_page(id))
            .err()
            .and_then(|e| Notice::for_error(&e, self.locale()))
    }

    pub fn switch_page(&mut self, id: &PageId) {
        let _ = self.apply("switch_page", |draft, _| draft.switch_page(id));
    }

    pub fn rename_page(&mut self, id: &PageId, title: &str) {
        let _ = self.apply("rename_page", |draft, _| draft.rename_page(id, title));
    }

    // ==================== Questions ====================

    pub fn add_question(&mut self, kind: QuestionKind) -> Option<QuestionId> {
        self.apply("add_question", |draft, locale| {
            draft.add_question(kind, locale)
        })
        .ok()
    }

    pub fn delete_question(&mut self, id: &QuestionId) {
        let _ = self.apply("delete_question", |draft, _| draft.delete_question(id));
    }

    pub fn update_question_title(&mut self, id: &QuestionId, title: &str) {
        let _ = self.apply("update_question_title", |draft, _| {
            draft.update_question_title(id, title)
        });
    }

    pub fn set_question_required(&mut self, id: &QuestionId, required: bool) {
        let _ = self.apply("set_question_required", |draft, _| {
            draft.set_question_required(id, required)
        });
    }

    // ==================== Options / rows / cols ====================

    pub fn add_option(&mut self, id: &QuestionId) {
        self.add_label(id, LabelList::Options);
    }

    pub fn remove_option(&mut self, id: &QuestionId, index: usize) {
        self.remove_label(id, LabelList::Options, index);
    }

    pub fn update_option(&mut self, id: &QuestionId, index: usize, text: &str) {
        self.update_label(id, LabelList::Options, index, text);
    }

    pub fn add_row(&mut self, id: &QuestionId) {
        self.add_label(id, LabelList::Rows);
    }

    pub fn remove_row(&mut self, id: &QuestionId, index: usize) {
        self.remove_label(id, LabelList::Rows, index);
    }

    pub fn update_row(&mut self, id: &QuestionId, index: usize, text: &str) {
        self.update_label(id, LabelList::Rows, index, text);
    }

    pub fn add_col(&mut self, id: &QuestionId) {
        self.add_label(id, LabelList::Cols);
    }

    pub fn remove_col(&mut self, id: &QuestionId, index: usize) {
        self.remove_label(id, LabelList::Cols, index);
    }

    pub fn update_col(&mut self, id: &QuestionId, index: usize, text: &str) {
        self.update_label(id, LabelList::Cols, index, text);
    }

    /// Append a placeholder item to `list`.
    pub fn add_label(&mut self, id: &QuestionId, list: LabelList) {
        let _ = self.apply("add_label", |draft, locale| {
            draft.add_label(id, list, locale)
        });
    }

    pub fn remove_label(&mut self, id: &QuestionId, list: LabelList, index: usize) {
        let _ = self.apply("remove_label", |draft, _| {
            draft.remove_label(id, list, index)
        });
    }

    pub fn update_label(&mut self, id: &QuestionId, list: LabelList, index: usize, text: &str) {
        let _ = self.apply("update_label", |draft, _| {
            draft.update_label(id, list, index, text)
        });
    }

    // ==================== Internals ====================

    /// Run a mutation; on success persist then render, on failure report a
    /// notice if the error is user-facing and otherwise stay silent.
    fn apply<T>(
        &mut self,
        operation: &'static str,
        mutate: impl FnOnce(&mut Draft, Locale) -> Result<T, DraftError>,
    ) -> Result<T, DraftError> {
        let locale = self.repository.locale();
        match mutate(&mut self.draft, locale) {
            Ok(value) => {
                self.commit();
                Ok(value)
            }
            Err(e) => {
                match Notice::for_error(&e, locale) {
                    Some(notice) => self.renderer.notify(&notice),
                    None => debug!("Ignoring {}: {}", operation, e),
                }
                Err(e)
            }
        }
    }

    fn commit(&self) {
        self.repository.save(&self.draft);
        self.renderer.render(&self.draft);
    }
}

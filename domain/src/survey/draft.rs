//! Draft state: the tree of pages and questions plus the current-page cursor.
//!
//! All mutations are pure in-memory operations that report why they were not
//! applied through [`DraftError`]. Question lookups are scoped to the current
//! page: a question can only be edited while its owning page is current.
//!
//! # Invariants
//!
//! After [`Draft::normalize`] and every successful mutation:
//! - `pages` is non-empty
//! - `current_page_id` names an existing page
//! - page ids are unique, and question ids are unique across the whole draft

use crate::core::error::DraftError;
use crate::core::id::{PageId, QuestionId};
use crate::core::locale::Locale;
use crate::survey::kind::QuestionKind;
use crate::survey::lenient;
use crate::survey::page::Page;
use crate::survey::question::{LabelList, Question};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// The in-memory survey under construction (Aggregate Root)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default, deserialize_with = "lenient::items")]
    pages: Vec<Page>,
    #[serde(default, deserialize_with = "page_ref")]
    current_page_id: Option<PageId>,
    /// Keys this build does not know, written back unchanged.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn page_ref<'de, D: Deserializer<'de>>(d: D) -> Result<Option<PageId>, D::Error> {
    Ok(lenient::text(d)?.map(PageId::new))
}

impl Draft {
    /// An empty draft with no pages. Only valid transiently, before
    /// [`Draft::normalize`] or the first [`Draft::add_page`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft with a single default page, which is current.
    pub fn with_default_page(locale: Locale) -> Self {
        let mut draft = Self::new();
        draft.add_page(Some(locale.default_page_title()), true, locale);
        draft
    }

    /// Wraps a legacy flat question list into a single current page.
    pub fn from_legacy_questions(questions: Vec<Question>, locale: Locale) -> Self {
        let page = Page::new(locale.default_page_title()).with_questions(questions);
        Self::from_pages(vec![page])
    }

    /// A draft of `pages` with the first one current.
    pub(crate) fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            current_page_id: pages.first().map(|p| p.id.clone()),
            pages,
            extra: Map::new(),
        }
    }

    // ==================== Queries ====================

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page_id(&self) -> Option<&PageId> {
        self.current_page_id.as_ref()
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current_page_id.as_ref().and_then(|id| self.page(id))
    }

    /// Questions of the current page, or an empty slice if there is none.
    pub fn current_questions(&self) -> &[Question] {
        self.current_page().map(Page::questions).unwrap_or(&[])
    }

    pub fn question_count(&self) -> usize {
        self.pages.iter().map(|p| p.questions.len()).sum()
    }

    /// Whether the draft invariants currently hold.
    pub fn is_consistent(&self) -> bool {
        if self.pages.is_empty() || self.current_page().is_none() {
            return false;
        }
        let mut page_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        self.pages.iter().all(|p| {
            page_ids.insert(&p.id) && p.questions.iter().all(|q| question_ids.insert(q.id()))
        })
    }

    // ==================== Page mutations ====================

    /// Appends a page. An empty or missing title becomes "Page N".
    ///
    /// The new page becomes current if `make_current` is set or it is the
    /// only page.
    pub fn add_page(&mut self, title: Option<&str>, make_current: bool, locale: Locale) -> PageId {
        let title = match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => locale.numbered_page_title(self.pages.len() + 1),
        };
        let page = Page::new(title);
        let id = page.id.clone();
        self.pages.push(page);
        if make_current || self.pages.len() == 1 {
            self.current_page_id = Some(id.clone());
        }
        id
    }

    /// Removes a page unless it is the last one.
    ///
    /// When the removed page was current, the first remaining page becomes
    /// current.
    pub fn delete_page(&mut self, id: &PageId) -> Result<Page, DraftError> {
        if self.pages.len() <= 1 {
            return Err(DraftError::LastPage);
        }
        let index = self.page_index(id)?;
        let removed = self.pages.remove(index);
        if self.current_page_id.as_ref() == Some(id) {
            self.current_page_id = self.pages.first().map(|p| p.id.clone());
        }
        Ok(removed)
    }

    pub fn switch_page(&mut self, id: &PageId) -> Result<(), DraftError> {
        self.page_index(id)?;
        self.current_page_id = Some(id.clone());
        Ok(())
    }

    pub fn rename_page(&mut self, id: &PageId, title: impl Into<String>) -> Result<(), DraftError> {
        let index = self.page_index(id)?;
        self.pages[index].title = title.into();
        Ok(())
    }

    // ==================== Question mutations ====================

    /// Appends a default question of `kind` to the current page.
    ///
    /// If there is no current page, a default page is synthesized first.
    pub fn add_question(
        &mut self,
        kind: QuestionKind,
        locale: Locale,
    ) -> Result<QuestionId, DraftError> {
        if self.current_page().is_none() {
            self.add_page(Some(locale.default_page_title()), true, locale);
        }
        let page = self.current_page_mut().ok_or(DraftError::NoCurrentPage)?;
        let question = Question::new_default(kind, locale);
        let id = question.id().clone();
        page.questions.push(question);
        Ok(id)
    }

    pub fn delete_question(&mut self, id: &QuestionId) -> Result<Question, DraftError> {
        let page = self.current_page_mut().ok_or(DraftError::NoCurrentPage)?;
        let index = page
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or_else(|| DraftError::QuestionNotFound(id.to_string()))?;
        Ok(page.questions.remove(index))
    }

    pub fn update_question_title(
        &mut self,
        id: &QuestionId,
        title: impl Into<String>,
    ) -> Result<(), DraftError> {
        self.question_mut(id)?.title = title.into();
        Ok(())
    }

    pub fn set_question_required(
        &mut self,
        id: &QuestionId,
        required: bool,
    ) -> Result<(), DraftError> {
        self.question_mut(id)?.required = required;
        Ok(())
    }

    /// Appends a placeholder labelled with its 1-based position. Returns the
    /// new length of the list.
    pub fn add_label(
        &mut self,
        id: &QuestionId,
        list: LabelList,
        locale: Locale,
    ) -> Result<usize, DraftError> {
        let labels = Self::labels_mut(self.question_mut(id)?, list)?;
        labels.push(list.placeholder(locale, labels.len() + 1));
        Ok(labels.len())
    }

    pub fn remove_label(
        &mut self,
        id: &QuestionId,
        list: LabelList,
        index: usize,
    ) -> Result<String, DraftError> {
        let labels = Self::labels_mut(self.question_mut(id)?, list)?;
        if index >= labels.len() {
            return Err(DraftError::IndexOutOfRange {
                index,
                len: labels.len(),
            });
        }
        Ok(labels.remove(index))
    }

    pub fn update_label(
        &mut self,
        id: &QuestionId,
        list: LabelList,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DraftError> {
        let labels = Self::labels_mut(self.question_mut(id)?, list)?;
        let len = labels.len();
        let slot = labels
            .get_mut(index)
            .ok_or(DraftError::IndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    // ==================== Normalization ====================

    /// Restores the invariants on a freshly decoded draft.
    ///
    /// Synthesizes a default page when there are none, gives duplicate page
    /// or question ids fresh identifiers (the first occurrence keeps its id),
    /// and points a missing or dangling cursor at the first page. Returns
    /// whether anything changed; a consistent draft is left untouched.
    pub fn normalize(&mut self, locale: Locale) -> bool {
        let mut changed = false;

        if self.pages.is_empty() {
            self.add_page(Some(locale.default_page_title()), true, locale);
            changed = true;
        }

        let mut page_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for page in &mut self.pages {
            if !page_ids.insert(page.id.clone()) {
                page.id = PageId::generate();
                page_ids.insert(page.id.clone());
                changed = true;
            }
            for question in &mut page.questions {
                if !question_ids.insert(question.id().clone()) {
                    question.reassign_id();
                    question_ids.insert(question.id().clone());
                    changed = true;
                }
            }
        }

        if self.current_page().is_none() {
            self.current_page_id = self.pages.first().map(|p| p.id.clone());
            changed = true;
        }

        changed
    }

    // ==================== Helpers ====================

    fn page_index(&self, id: &PageId) -> Result<usize, DraftError> {
        self.pages
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DraftError::PageNotFound(id.to_string()))
    }

    fn current_page_mut(&mut self) -> Option<&mut Page> {
        let id = self.current_page_id.as_ref()?;
        self.pages.iter_mut().find(|p| &p.id == id)
    }

    fn question_mut(&mut self, id: &QuestionId) -> Result<&mut Question, DraftError> {
        self.current_page_mut()
            .ok_or(DraftError::NoCurrentPage)?
            .questions
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or_else(|| DraftError::QuestionNotFound(id.to_string()))
    }

    fn labels_mut(question: &mut Question, list: LabelList) -> Result<&mut Vec<String>, DraftError> {
        let kind = question.kind().to_string();
        question
            .labels_mut(list)
            .ok_or(DraftError::FieldNotApplicable {
                kind,
                list: list.as_str(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RU: Locale = Locale::Ru;

    fn draft_with_pages(n: usize) -> (Draft, Vec<PageId>) {
        let mut draft = Draft::new();
        let ids = (0..n).map(|_| draft.add_page(None, false, RU)).collect();
        (draft, ids)
    }

    #[test]
    fn test_first_page_becomes_current() {
        let (draft, ids) = draft_with_pages(2);
        assert_eq!(draft.current_page_id(), Some(&ids[0]));
        assert_eq!(draft.pages()[1].title, "Страница 2");
        assert!(draft.is_consistent());
    }

    #[test]
    fn test_add_page_make_current_and_title() {
        let (mut draft, _) = draft_with_pages(1);
        let id = draft.add_page(Some("Intro"), true, RU);
        assert_eq!(draft.current_page_id(), Some(&id));
        assert_eq!(draft.current_page().unwrap().title, "Intro");
    }

    #[test]
    fn test_add_page_empty_title_falls_back_to_number() {
        let (mut draft, _) = draft_with_pages(2);
        draft.add_page(Some(""), false, RU);
        assert_eq!(draft.pages()[2].title, "Страница 3");
    }

    #[test]
    fn test_delete_last_page_is_refused() {
        let (mut draft, ids) = draft_with_pages(1);
        let before = draft.clone();
        assert_eq!(draft.delete_page(&ids[0]), Err(DraftError::LastPage));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_delete_current_page_moves_cursor_to_first() {
        let (mut draft, ids) = draft_with_pages(3);
        draft.switch_page(&ids[2]).unwrap();
        draft.delete_page(&ids[2]).unwrap();
        assert_eq!(draft.pages().len(), 2);
        assert_eq!(draft.current_page_id(), Some(&ids[0]));
    }

    #[test]
    fn test_delete_middle_current_page_does_not_pick_neighbor() {
        let (mut draft, ids) = draft_with_pages(3);
        draft.switch_page(&ids[1]).unwrap();
        draft.delete_page(&ids[1]).unwrap();
        assert_eq!(draft.current_page_id(), Some(&ids[0]));
    }

    #[test]
    fn test_delete_non_current_page_keeps_cursor() {
        let (mut draft, ids) = draft_with_pages(3);
        draft.switch_page(&ids[2]).unwrap();
        draft.delete_page(&ids[0]).unwrap();
        assert_eq!(draft.current_page_id(), Some(&ids[2]));
    }

    #[test]
    fn test_delete_unknown_page() {
        let (mut draft, _) = draft_with_pages(2);
        let result = draft.delete_page(&PageId::new("nope"));
        assert!(matches!(result, Err(DraftError::PageNotFound(_))));
        assert_eq!(draft.pages().len(), 2);
    }

    #[test]
    fn test_switch_to_unknown_page_is_rejected() {
        let (mut draft, ids) = draft_with_pages(2);
        assert!(draft.switch_page(&PageId::new("nope")).is_err());
        assert_eq!(draft.current_page_id(), Some(&ids[0]));
    }

    #[test]
    fn test_rename_page() {
        let (mut draft, ids) = draft_with_pages(2);
        draft.rename_page(&ids[1], "Contacts").unwrap();
        assert_eq!(draft.page(&ids[1]).unwrap().title, "Contacts");
        assert!(draft.rename_page(&PageId::new("nope"), "x").is_err());
    }

    #[test]
    fn test_add_question_without_pages_synthesizes_default_page() {
        let mut draft = Draft::new();
        let qid = draft.add_question(QuestionKind::Text, RU).unwrap();
        assert_eq!(draft.pages().len(), 1);
        assert_eq!(draft.pages()[0].title, "Главная страница");
        assert_eq!(draft.current_questions()[0].id(), &qid);
        assert!(draft.is_consistent());
    }

    #[test]
    fn test_question_lookup_is_scoped_to_current_page() {
        let (mut draft, ids) = draft_with_pages(2);
        let qid = draft.add_question(QuestionKind::Email, RU).unwrap();
        draft.switch_page(&ids[1]).unwrap();

        assert!(matches!(
            draft.update_question_title(&qid, "hidden"),
            Err(DraftError::QuestionNotFound(_))
        ));
        assert!(draft.delete_question(&qid).is_err());

        draft.switch_page(&ids[0]).unwrap();
        draft.update_question_title(&qid, "Email").unwrap();
        draft.set_question_required(&qid, true).unwrap();
        let q = &draft.current_questions()[0];
        assert_eq!(q.title, "Email");
        assert!(q.required);

        draft.delete_question(&qid).unwrap();
        assert!(draft.current_questions().is_empty());
    }

    #[test]
    fn test_option_operations() {
        let mut draft = Draft::with_default_page(RU);
        let qid = draft.add_question(QuestionKind::SingleChoice, RU).unwrap();

        assert_eq!(draft.add_label(&qid, LabelList::Options, RU), Ok(3));
        let q = &draft.current_questions()[0];
        assert_eq!(
            q.labels(LabelList::Options).unwrap(),
            ["Вариант 1", "Вариант 2", "Вариант 3"]
        );

        draft.update_label(&qid, LabelList::Options, 0, "Да").unwrap();
        assert_eq!(
            draft.remove_label(&qid, LabelList::Options, 1),
            Ok("Вариант 2".to_string())
        );
        let q = &draft.current_questions()[0];
        assert_eq!(q.labels(LabelList::Options).unwrap(), ["Да", "Вариант 3"]);
    }

    #[test]
    fn test_label_out_of_range_is_rejected() {
        let mut draft = Draft::with_default_page(RU);
        let qid = draft.add_question(QuestionKind::Dropdown, RU).unwrap();
        let before = draft.clone();

        assert_eq!(
            draft.remove_label(&qid, LabelList::Options, 2),
            Err(DraftError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(draft.update_label(&qid, LabelList::Options, 9, "x").is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_label_list_mismatch_is_rejected() {
        let mut draft = Draft::with_default_page(RU);
        let text = draft.add_question(QuestionKind::Text, RU).unwrap();
        let matrix = draft.add_question(QuestionKind::Matrix, RU).unwrap();
        let before = draft.clone();

        assert!(matches!(
            draft.add_label(&text, LabelList::Options, RU),
            Err(DraftError::FieldNotApplicable { .. })
        ));
        assert!(draft.add_label(&matrix, LabelList::Options, RU).is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_matrix_rows_and_cols_are_independent() {
        let mut draft = Draft::with_default_page(RU);
        let qid = draft.add_question(QuestionKind::Matrix, RU).unwrap();

        draft.add_label(&qid, LabelList::Rows, RU).unwrap();
        draft.remove_label(&qid, LabelList::Cols, 0).unwrap();
        draft.update_label(&qid, LabelList::Cols, 0, "B").unwrap();

        let q = &draft.current_questions()[0];
        assert_eq!(
            q.labels(LabelList::Rows).unwrap(),
            ["Строка 1", "Строка 2", "Строка 3"]
        );
        assert_eq!(q.labels(LabelList::Cols).unwrap(), ["B"]);
    }

    #[test]
    fn test_normalize_empty_draft() {
        let mut draft = Draft::new();
        assert!(draft.normalize(RU));
        assert!(draft.is_consistent());
        assert_eq!(draft.pages()[0].title, "Главная страница");
    }

    #[test]
    fn test_normalize_leaves_consistent_draft_untouched() {
        let mut draft = Draft::with_default_page(RU);
        draft.add_question(QuestionKind::Date, RU).unwrap();
        let before = draft.clone();
        assert!(!draft.normalize(RU));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_normalize_repairs_duplicates_and_dangling_cursor() {
        let mut draft: Draft = serde_json::from_value(serde_json::json!({
            "pages": [
                {"id": "p", "title": "A", "questions": [{"id": "q", "kind": "text"}]},
                {"id": "p", "title": "B", "questions": [{"id": "q", "kind": "email"}]}
            ],
            "currentPageId": "gone"
        }))
        .unwrap();

        assert!(!draft.is_consistent());
        assert!(draft.normalize(RU));
        assert!(draft.is_consistent());
        assert_eq!(draft.pages()[0].id().as_str(), "p");
        assert_ne!(draft.pages()[1].id().as_str(), "p");
        assert_eq!(draft.pages()[0].questions()[0].id().as_str(), "q");
        assert_ne!(draft.pages()[1].questions()[0].id().as_str(), "q");
        assert_eq!(draft.current_page_id().unwrap().as_str(), "p");
    }
}

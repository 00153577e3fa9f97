//! View model types

use serde::Serialize;

/// One entry of the page list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageItemView {
    pub id: String,
    pub title: String,
    /// This is the current page
    pub active: bool,
    /// Only the active page exposes its title for editing
    pub title_editable: bool,
    /// Deletion is offered only while more than one page exists
    pub deletable: bool,
    pub question_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageListView {
    pub items: Vec<PageItemView>,
}

/// Bullet drawn in front of each option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceMarker {
    /// Single-select kinds
    Round,
    /// Multi-select
    Square,
}

/// Kind-specific editable part of a question card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum CardBody {
    Choice {
        marker: ChoiceMarker,
        options: Vec<String>,
    },
    Matrix {
        rows: Vec<String>,
        cols: Vec<String>,
    },
    Hint {
        text: String,
    },
    FreeText {
        placeholder: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCardView {
    pub id: String,
    /// 1-based position on the page
    pub number: usize,
    pub kind: String,
    pub kind_label: String,
    pub title: String,
    pub required: bool,
    pub body: CardBody,
}

/// Questions of the current page.
///
/// `empty` is set when the page has no questions so the sink can show its
/// placeholder state instead of an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionListView {
    pub cards: Vec<QuestionCardView>,
    pub empty: bool,
}

/// Everything a sink needs to redraw the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftView {
    pub pages: PageListView,
    pub questions: QuestionListView,
}

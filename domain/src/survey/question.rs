//! Question entity.
//!
//! A question is a tagged union by [`QuestionKind`]: the common fields live on
//! [`Question`], and the kind-specific lists live in [`QuestionBody`]. The
//! body always matches the kind's [`KindShape`]; it can only be built through
//! [`Question::new_default`] or decoding, both of which derive it from the
//! kind.

use crate::core::id::QuestionId;
use crate::core::locale::Locale;
use crate::survey::kind::{KindShape, QuestionKind};
use crate::survey::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which ordered label list of a question an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelList {
    Options,
    Rows,
    Cols,
}

impl LabelList {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Options => "options",
            Self::Rows => "rows",
            Self::Cols => "cols",
        }
    }

    /// Placeholder for a newly appended item at 1-based position `n`.
    pub fn placeholder(&self, locale: Locale, n: usize) -> String {
        match self {
            Self::Options => locale.option_label(n),
            Self::Rows => locale.row_label(n),
            Self::Cols => locale.col_label(n),
        }
    }
}

/// Kind-specific fields of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    /// Ordered option labels; duplicates permitted.
    Choice { options: Vec<String> },
    /// Two independent ordered label sequences.
    Matrix { rows: Vec<String>, cols: Vec<String> },
    Scalar,
}

/// A survey question (Entity)
///
/// Fields this build does not understand are kept in `extra` and written
/// back unchanged, including label lists the kind does not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    pub title: String,
    pub required: bool,
    body: QuestionBody,
    extra: Map<String, Value>,
}

impl Question {
    /// Builds a question of `kind` seeded with placeholder title and items.
    pub fn new_default(kind: QuestionKind, locale: Locale) -> Self {
        let body = match &kind {
            QuestionKind::SingleChoice | QuestionKind::MultipleChoice | QuestionKind::Dropdown => {
                QuestionBody::Choice {
                    options: (1..=2).map(|n| locale.option_label(n)).collect(),
                }
            }
            QuestionKind::Ranking => QuestionBody::Choice {
                options: (1..=3).map(|n| locale.ranking_item(n)).collect(),
            },
            QuestionKind::ImageChoice => QuestionBody::Choice {
                options: (1..=2).map(|n| locale.image_item(n)).collect(),
            },
            QuestionKind::Matrix => QuestionBody::Matrix {
                rows: (1..=2).map(|n| locale.row_label(n)).collect(),
                cols: (1..=2).map(|n| locale.col_label(n)).collect(),
            },
            _ => QuestionBody::Scalar,
        };

        Self::with_body(kind, locale.question_title(), false, body)
    }

    /// A question with the given fields and `options` as its choice list.
    ///
    /// `options` is ignored for kinds without one; matrices start empty.
    pub(crate) fn with_options(
        kind: QuestionKind,
        title: impl Into<String>,
        required: bool,
        options: Vec<String>,
    ) -> Self {
        let body = match kind.shape() {
            KindShape::Choice => QuestionBody::Choice { options },
            KindShape::Matrix => QuestionBody::Matrix {
                rows: Vec::new(),
                cols: Vec::new(),
            },
            KindShape::Scalar => QuestionBody::Scalar,
        };
        Self::with_body(kind, title, required, body)
    }

    fn with_body(
        kind: QuestionKind,
        title: impl Into<String>,
        required: bool,
        body: QuestionBody,
    ) -> Self {
        Self {
            id: QuestionId::generate(),
            kind,
            title: title.into(),
            required,
            body,
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn body(&self) -> &QuestionBody {
        &self.body
    }

    /// The requested list, if this question's kind carries it.
    pub fn labels(&self, list: LabelList) -> Option<&[String]> {
        match (&self.body, list) {
            (QuestionBody::Choice { options }, LabelList::Options) => Some(options.as_slice()),
            (QuestionBody::Matrix { rows, .. }, LabelList::Rows) => Some(rows.as_slice()),
            (QuestionBody::Matrix { cols, .. }, LabelList::Cols) => Some(cols.as_slice()),
            _ => None,
        }
    }

    pub fn labels_mut(&mut self, list: LabelList) -> Option<&mut Vec<String>> {
        match (&mut self.body, list) {
            (QuestionBody::Choice { options }, LabelList::Options) => Some(options),
            (QuestionBody::Matrix { rows, .. }, LabelList::Rows) => Some(rows),
            (QuestionBody::Matrix { cols, .. }, LabelList::Cols) => Some(cols),
            _ => None,
        }
    }

    pub(crate) fn reassign_id(&mut self) {
        self.id = QuestionId::generate();
    }
}

/// Wire shape of a question inside a persisted record.
///
/// Lenient on read: `type` is accepted for `kind`, badly typed fields fall
/// back to defaults (a fresh id, empty title, not required), and unknown
/// keys are collected into `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    kind: Option<String>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient::text",
        skip_serializing
    )]
    type_tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rows: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cols: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Parks a list the body does not use so it is written back as found.
fn retain(extra: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        extra.insert(key.to_string(), value);
    }
}

fn labels(value: Option<&Value>) -> Vec<String> {
    value.and_then(lenient::as_labels).unwrap_or_default()
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        let kind = record
            .kind
            .or(record.type_tag)
            .map(QuestionKind::from)
            .unwrap_or(QuestionKind::Text);

        let mut extra = record.extra;
        let body = match kind.shape() {
            KindShape::Choice => {
                let options = labels(record.options.as_ref());
                retain(&mut extra, "rows", record.rows);
                retain(&mut extra, "cols", record.cols);
                QuestionBody::Choice { options }
            }
            KindShape::Matrix => {
                let body = QuestionBody::Matrix {
                    rows: labels(record.rows.as_ref()),
                    cols: labels(record.cols.as_ref()),
                };
                retain(&mut extra, "options", record.options);
                body
            }
            KindShape::Scalar => {
                retain(&mut extra, "options", record.options);
                retain(&mut extra, "rows", record.rows);
                retain(&mut extra, "cols", record.cols);
                QuestionBody::Scalar
            }
        };

        Self {
            id: record
                .id
                .map(QuestionId::new)
                .unwrap_or_else(QuestionId::generate),
            kind,
            title: record.title.unwrap_or_default(),
            required: record.required.unwrap_or(false),
            body,
            extra,
        }
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        let list = |labels: Vec<String>| Some(Value::from(labels));
        let (options, rows, cols) = match question.body {
            QuestionBody::Choice { options } => (list(options), None, None),
            QuestionBody::Matrix { rows, cols } => (None, list(rows), list(cols)),
            QuestionBody::Scalar => (None, None, None),
        };

        let mut extra = question.extra;
        // Parked lists go back to their own keys.
        let options = options.or_else(|| extra.remove("options"));
        let rows = rows.or_else(|| extra.remove("rows"));
        let cols = cols.or_else(|| extra.remove("cols"));

        Self {
            id: Some(question.id.as_str().to_string()),
            kind: Some(question.kind.as_str().to_string()),
            type_tag: None,
            title: Some(question.title),
            required: Some(question.required),
            options,
            rows,
            cols,
            extra,
        }
    }
}

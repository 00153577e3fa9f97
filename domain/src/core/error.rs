//! Domain error types

use thiserror::Error;

/// Reasons a draft mutation was not applied.
///
/// Mutations on [`Draft`](crate::Draft) report these explicitly; the
/// controller decides which ones the user ever gets to see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("The last remaining page cannot be deleted")]
    LastPage,

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Question not found on the current page: {0}")]
    QuestionNotFound(String),

    #[error("Index {index} is out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Question kind '{kind}' has no {list} list")]
    FieldNotApplicable { kind: String, list: &'static str },

    #[error("No current page")]
    NoCurrentPage,
}

impl DraftError {
    /// Whether this error should be surfaced to the user.
    ///
    /// Only the refusal to delete the last page is user-facing; everything
    /// else is an internal targeting slip.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DraftError::LastPage)
    }
}

/// Errors decoding or encoding a persisted draft record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Record is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Record is not a JSON object")]
    NotAnObject,

    #[error("Record has neither a pages nor a questions sequence")]
    Unrecognized,
}

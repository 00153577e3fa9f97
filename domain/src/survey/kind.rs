//! Question kinds.
//!
//! The kind selects a question's answer-input shape. Known kinds map to one
//! of three field layouts ([`KindShape`]); any other tag is kept verbatim as
//! [`QuestionKind::Other`] so foreign records survive a load/save cycle.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Field layout implied by a question kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindShape {
    /// Carries an ordered `options` list.
    Choice,
    /// Carries independent `rows` and `cols` lists.
    Matrix,
    /// Carries only the common fields.
    Scalar,
}

/// Tag selecting a question's answer-input shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
    Dropdown,
    Ranking,
    ImageChoice,
    Matrix,
    Text,
    Email,
    Number,
    Date,
    /// A tag this build does not know; preserved as-is.
    Other(String),
}

impl QuestionKind {
    /// Every known kind, in menu order.
    pub const KNOWN: [QuestionKind; 10] = [
        QuestionKind::SingleChoice,
        QuestionKind::MultipleChoice,
        QuestionKind::ImageChoice,
        QuestionKind::Text,
        QuestionKind::Email,
        QuestionKind::Number,
        QuestionKind::Date,
        QuestionKind::Matrix,
        QuestionKind::Ranking,
        QuestionKind::Dropdown,
    ];

    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::SingleChoice => "single_choice",
            Self::MultipleChoice => "multiple_choice",
            Self::Dropdown => "dropdown",
            Self::Ranking => "ranking",
            Self::ImageChoice => "image_choice",
            Self::Matrix => "matrix",
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
            Self::Other(raw) => raw,
        }
    }

    pub fn shape(&self) -> KindShape {
        match self {
            Self::SingleChoice
            | Self::MultipleChoice
            | Self::Dropdown
            | Self::Ranking
            | Self::ImageChoice => KindShape::Choice,
            Self::Matrix => KindShape::Matrix,
            Self::Text | Self::Email | Self::Number | Self::Date | Self::Other(_) => {
                KindShape::Scalar
            }
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for QuestionKind {
    fn from(s: &str) -> Self {
        match s {
            "single_choice" => Self::SingleChoice,
            "multiple_choice" => Self::MultipleChoice,
            "dropdown" => Self::Dropdown,
            "ranking" => Self::Ranking,
            "image_choice" => Self::ImageChoice,
            "matrix" => Self::Matrix,
            "text" => Self::Text,
            "email" => Self::Email,
            "number" => Self::Number,
            "date" => Self::Date,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for QuestionKind {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

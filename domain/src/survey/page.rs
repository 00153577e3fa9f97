//! Page entity

use crate::core::id::PageId;
use crate::survey::lenient;
use crate::survey::question::Question;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// An ordered group of questions shown together (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "PageId::generate", deserialize_with = "page_id")]
    pub(crate) id: PageId,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub title: String,
    /// Presentation order is authoritative.
    #[serde(default, deserialize_with = "lenient::items")]
    pub(crate) questions: Vec<Question>,
    /// Keys this build does not know, written back unchanged.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

fn page_id<'de, D: Deserializer<'de>>(d: D) -> Result<PageId, D::Error> {
    Ok(lenient::text(d)?
        .map(PageId::new)
        .unwrap_or_else(PageId::generate))
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: PageId::generate(),
            title: title.into(),
            questions: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn id(&self) -> &PageId {
        &self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub(crate) fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }
}

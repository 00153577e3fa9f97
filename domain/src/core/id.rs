//! Opaque identifiers for pages and questions.
//!
//! Identifiers are `<unix millis>_<random hex>`: unique across calls within a
//! session with overwhelming probability. They are opaque on the wire and
//! only ever compared for equality.

use serde::{Deserialize, Serialize};

/// Generates a fresh opaque identifier.
pub fn new_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u64 = rand::random();
    format!("{}_{:x}", millis, suffix)
}

/// Identifier of a page, unique within a draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Creates a PageId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique PageId.
    pub fn generate() -> Self {
        Self(new_id())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for PageId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a question, unique across the whole draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique QuestionId.
    pub fn generate() -> Self {
        Self(new_id())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for QuestionId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

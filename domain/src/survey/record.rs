//! Persisted draft record codec.
//!
//! Decoding is versioned: the current `{ pages, currentPageId }` schema is
//! tried first, then the legacy single-page `{ questions }` schema, which is
//! transformed into the current shape. Encoding only ever writes the current
//! schema.
//!
//! Decoding never rejects an object over one bad field: badly typed fields
//! fall back to defaults and items that are not objects are dropped, so the
//! rest of the user's pages survive.

use crate::core::error::RecordError;
use crate::core::locale::Locale;
use crate::survey::draft::Draft;
use crate::survey::lenient;
use crate::survey::question::Question;
use serde_json::Value;

/// Result of decoding a persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRecord {
    /// The record was already in the current schema.
    Current(Draft),
    /// The record was in the legacy schema and has been converted.
    Migrated(Draft),
}

impl DecodedRecord {
    pub fn is_migrated(&self) -> bool {
        matches!(self, Self::Migrated(_))
    }

    pub fn into_draft(self) -> Draft {
        match self {
            Self::Current(draft) | Self::Migrated(draft) => draft,
        }
    }
}

/// Decodes a persisted record.
///
/// A legacy record's questions are wrapped into a single page titled with the
/// locale's default page name, which becomes current.
pub fn decode_record(text: &str, locale: Locale) -> Result<DecodedRecord, RecordError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(mut map) = value else {
        return Err(RecordError::NotAnObject);
    };

    if map.get("pages").is_some_and(Value::is_array) {
        // A stale legacy list next to `pages` is not carried forward.
        map.remove("questions");
        let draft: Draft = serde_json::from_value(Value::Object(map))?;
        return Ok(DecodedRecord::Current(draft));
    }

    if let Some(questions) = map.get("questions").and_then(Value::as_array) {
        let questions: Vec<Question> = lenient::collect(questions);
        return Ok(DecodedRecord::Migrated(Draft::from_legacy_questions(
            questions, locale,
        )));
    }

    Err(RecordError::Unrecognized)
}

/// Decodes a template bootstrap payload.
///
/// Only the current schema with a non-empty `pages` sequence is accepted.
pub fn decode_template(text: &str, locale: Locale) -> Result<Draft, RecordError> {
    match decode_record(text, locale)? {
        DecodedRecord::Current(draft) if !draft.pages().is_empty() => Ok(draft),
        _ => Err(RecordError::Unrecognized),
    }
}

/// Serializes a draft in the current schema.
pub fn encode_record(draft: &Draft) -> Result<String, RecordError> {
    Ok(serde_json::to_string(draft)?)
}

//! Domain layer for pollstream
//!
//! This crate contains the survey draft model and every rule that governs it.
//! It has no dependencies on storage or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Draft**: the survey under construction, an ordered list of pages plus
//!   the page currently shown
//! - **Page**: an ordered group of questions
//! - **Question**: a title, a required flag and kind-specific label lists
//! - **Record**: the persisted text form of a draft, including the legacy
//!   single-page form that is migrated on read

pub mod core;
pub mod survey;

// Re-export commonly used types
pub use crate::core::{
    error::{DraftError, RecordError},
    id::{PageId, QuestionId, new_id},
    locale::Locale,
};
pub use survey::{
    draft::Draft,
    kind::{KindShape, QuestionKind},
    page::Page,
    question::{LabelList, Question, QuestionBody},
    record::{DecodedRecord, decode_record, decode_template, encode_record},
    template::{SurveyTemplate, TemplatePage, TemplateQuestion, builtin_templates, find_template},
};

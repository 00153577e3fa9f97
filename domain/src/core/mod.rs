//! Core domain concepts shared across the survey model.
//!
//! - [`id`]: opaque identifiers for pages and questions
//! - [`locale::Locale`]: placeholder and label texts
//! - [`error`]: domain-level errors

pub mod error;
pub mod id;
pub mod locale;

//! Survey draft domain.
//!
//! - [`draft::Draft`]: pages, questions and the current-page cursor
//! - [`question::Question`]: a question, tagged by [`kind::QuestionKind`]
//! - [`record`]: persisted record codec with legacy migration
//! - [`template`]: built-in survey templates

pub mod draft;
pub mod kind;
mod lenient;
pub mod page;
pub mod question;
pub mod record;
pub mod template;

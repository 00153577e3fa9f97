//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod bootstrap_template;
pub mod draft_controller;
pub mod load_draft;

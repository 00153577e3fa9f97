//! Application-level configuration.
//!
//! - [`BuilderConfig`]: storage namespace, locale and default survey name

pub mod builder_config;

pub use builder_config::{BuilderConfig, DEFAULT_NAMESPACE, DEFAULT_SURVEY_NAME};

//! Builder configuration.

use pollstream_domain::Locale;
use serde::{Deserialize, Serialize};

/// Namespace every draft key is scoped under.
pub const DEFAULT_NAMESPACE: &str = "pollstream:builder";

/// Survey name used when the user did not provide one.
pub const DEFAULT_SURVEY_NAME: &str = "Новый опрос";

/// Settings that control how drafts are keyed and seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Prefix of the durable key: `"<namespace>:<survey name>"`.
    pub namespace: String,
    /// Language of placeholder texts.
    pub locale: Locale,
    pub default_survey_name: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            locale: Locale::default(),
            default_survey_name: DEFAULT_SURVEY_NAME.to_string(),
        }
    }
}

impl BuilderConfig {
    // ==================== Builder Methods ====================

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_default_survey_name(mut self, name: impl Into<String>) -> Self {
        self.default_survey_name = name.into();
        self
    }

    /// Durable key of the draft for `survey_name`.
    ///
    /// A blank name falls back to the default survey name.
    pub fn storage_key(&self, survey_name: &str) -> String {
        let name = if survey_name.trim().is_empty() {
            self.default_survey_name.as_str()
        } else {
            survey_name
        };
        format!("{}:{}", self.namespace, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        let config = BuilderConfig::default();
        assert_eq!(config.storage_key("Team"), "pollstream:builder:Team");
        assert_eq!(config.storage_key("  "), "pollstream:builder:Новый опрос");
    }

    #[test]
    fn test_builder_methods() {
        let config = BuilderConfig::default()
            .with_namespace("test")
            .with_locale(Locale::En)
            .with_default_survey_name("Untitled");
        assert_eq!(config.storage_key(""), "test:Untitled");
        assert_eq!(config.locale, Locale::En);
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Free-form strings (locale) are kept raw here and parsed during
//! validation / conversion, so a typo produces a warning instead of a
//! hard load failure.

mod builder;
mod output;
mod storage;

pub use builder::FileBuilderConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use storage::FileStorageConfig;

use pollstream_application::BuilderConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found in an otherwise well-formed config file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("builder.locale: unknown value '{0}', falling back to 'ru'")]
    UnknownLocale(String),

    #[error("storage.namespace: empty namespace, falling back to the default")]
    EmptyNamespace,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where drafts are kept
    pub storage: FileStorageConfig,
    /// Builder behavior
    pub builder: FileBuilderConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.storage.namespace.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyNamespace);
        }
        if let Err(issue) = self.builder.parse_locale() {
            issues.push(issue);
        }

        issues
    }

    /// Convert into the application-level builder configuration.
    ///
    /// Invalid values fall back to defaults, matching what `validate()` reports.
    pub fn to_builder_config(&self) -> BuilderConfig {
        let mut config = BuilderConfig::default()
            .with_locale(self.builder.parse_locale().unwrap_or_default());

        let namespace = self.storage.namespace.trim();
        if !namespace.is_empty() {
            config = config.with_namespace(namespace);
        }

        let name = self.builder.default_survey_name.trim();
        if !name.is_empty() {
            config = config.with_default_survey_name(name);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pollstream_domain::Locale;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[storage]
namespace = "acme:surveys"
dir = "/var/lib/pollstream"

[builder]
locale = "en"
default_survey_name = "Untitled"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.namespace, "acme:surveys");
        assert_eq!(
            config.storage.dir.as_deref(),
            Some(std::path::Path::new("/var/lib/pollstream"))
        );
        assert_eq!(config.builder.locale, "en");
        assert_eq!(config.output.format, FileOutputFormat::Json);
        assert!(!config.output.color);
        assert!(config.validate().is_empty());

        let builder = config.to_builder_config();
        assert_eq!(builder.namespace, "acme:surveys");
        assert_eq!(builder.locale, Locale::En);
        assert_eq!(builder.default_survey_name, "Untitled");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());

        let builder = config.to_builder_config();
        assert_eq!(builder, BuilderConfig::default());
    }

    #[test]
    fn test_validate_reports_issues_and_conversion_falls_back() {
        let toml_str = r#"
[storage]
namespace = "  "

[builder]
locale = "fr"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(
            issues,
            vec![
                ConfigValidationError::EmptyNamespace,
                ConfigValidationError::UnknownLocale("fr".to_string()),
            ]
        );

        let builder = config.to_builder_config();
        assert_eq!(builder.namespace, BuilderConfig::default().namespace);
        assert_eq!(builder.locale, Locale::Ru);
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let config: FileConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config, FileConfig::default());
    }
}

//! Builder configuration from TOML (`[builder]` section)

use super::ConfigValidationError;
use pollstream_application::config::DEFAULT_SURVEY_NAME;
use pollstream_domain::Locale;
use serde::{Deserialize, Serialize};

/// Raw builder configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBuilderConfig {
    /// Placeholder language: "ru" or "en"
    pub locale: String,
    /// Survey name used when none is given
    pub default_survey_name: String,
}

impl Default for FileBuilderConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default().as_str().to_string(),
            default_survey_name: DEFAULT_SURVEY_NAME.to_string(),
        }
    }
}

impl FileBuilderConfig {
    pub fn parse_locale(&self) -> Result<Locale, ConfigValidationError> {
        self.locale
            .parse()
            .map_err(|_| ConfigValidationError::UnknownLocale(self.locale.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_is_case_insensitive() {
        let config = FileBuilderConfig {
            locale: "EN".to_string(),
            ..Default::default()
        };
        assert_eq!(config.parse_locale(), Ok(Locale::En));
    }

    #[test]
    fn test_parse_locale_rejects_unknown() {
        let config = FileBuilderConfig {
            locale: "de".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.parse_locale(),
            Err(ConfigValidationError::UnknownLocale("de".to_string()))
        );
    }
}

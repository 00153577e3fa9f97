//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// How the CLI prints the draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    #[default]
    Text,
    Json,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::Text,
            color: true,
        }
    }
}

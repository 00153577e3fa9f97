//! Configuration file loading for pollstream
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `POLLSTREAM_*` environment variables (`POLLSTREAM_BUILDER__LOCALE=en`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./pollstream.toml` or `./.pollstream.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pollstream/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBuilderConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileStorageConfig,
};
pub use loader::ConfigLoader;

//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["pollstream.toml", ".pollstream.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `POLLSTREAM_` environment variables, `__` separating section and key
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./pollstream.toml` or `./.pollstream.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/pollstream/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path(),
            Self::project_config_path(),
            config_path,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(
        global: Option<PathBuf>,
        project: Option<PathBuf>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }
        if let Some(project_path) = project {
            figment = figment.merge(Toml::file(project_path));
        }
        // An explicit path that does not exist is an error, not a silent skip.
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed("POLLSTREAM_").split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/pollstream/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pollstream").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: POLLSTREAM_<SECTION>__<KEY>");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./pollstream.toml or ./.pollstream.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

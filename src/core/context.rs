use std::env;
use std::path::{Path, PathBuf};

use super::config::Config;

/// Runtime context holding paths and the loaded configuration.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl AppCtx {
    /// Loads `~/.storycast/config.toml`, or `config_override` when given.
    pub fn init(config_override: Option<&Path>) -> Result<Self, String> {
        let config_path = match config_override {
            Some(path) => path.to_path_buf(),
            None => {
                let home = env::var("HOME")
                    .map_err(|_| "Unable to determine HOME directory".to_string())?;
                PathBuf::from(home).join(".storycast").join("config.toml")
            }
        };
        let base_dir = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let config = Config::load(&config_path)
            .map_err(|e| format!("{}: {}", config_path.display(), e))?;

        Ok(Self {
            base_dir,
            config_path,
            config,
        })
    }
}

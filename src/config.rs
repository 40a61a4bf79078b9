use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the selection is stored.
    pub data_dir: Option<PathBuf>,
    /// Where downloaded sprites are kept.
    pub cache_dir: Option<PathBuf>,
    /// An external JSON dataset to use instead of the bundled one.
    pub dataset: Option<PathBuf>,
    pub sprites: bool,
}

impl Config {
    /// Reads the configuration file, if any.
    pub async fn load() -> Self {
        let path = config_path();

        match fs::read_to_string(&path).await {
            Ok(config) => {
                log::info!("Loading configuration from {}", path.display());

                Self::parse(&config)
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(error) => {
                log::warn!("Could not read {}: {error}", path.display());

                Self::default()
            }
        }
    }

    /// Parses a RON configuration. Missing fields keep their defaults and a
    /// malformed configuration is replaced by the defaults.
    pub fn parse(config: &str) -> Self {
        match ron::from_str(config) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("Ignoring malformed configuration: {error}");

                Self::default()
            }
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| app_dir(dirs::data_dir()))
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir
            .clone()
            .unwrap_or_else(|| app_dir(dirs::cache_dir()).join("sprites"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            cache_dir: None,
            dataset: None,
            sprites: true,
        }
    }
}

fn config_path() -> PathBuf {
    app_dir(dirs::config_dir()).join("config.ron")
}

fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_default().join(env!("CARGO_PKG_NAME"))
}

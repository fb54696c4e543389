use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use insightful_core::Settings;
use insightful_engine::EngineConfig;
use insightful_logging::{default_log_file, engine_info, LogDestination};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "insightful.ron";
const CONFIG_ENV: &str = "INSIGHTFUL_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Initial session settings; changes made at runtime are not written back.
    pub settings: Settings,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            settings: Settings::default(),
            log_destination: LogDestination::File,
            log_file: default_log_file(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// `$INSIGHTFUL_CONFIG`, or `./insightful.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}

/// Loads the config at `path`. A missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    engine_info!("Loaded config from {:?}", path);
    Ok(config)
}

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No narratives path provided and no config file found at {config_path}")]
    MissingConfig { config_path: PathBuf },

    #[error("Too many arguments; expected [narratives-path] [narrative-key]")]
    Usage,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory holding `<key>.json` narrative files
    pub narratives_path: PathBuf,
    /// Narrative opened at startup instead of the overview
    #[serde(default)]
    pub default_narrative: Option<String>,
}

/// Settings a binary starts with, after command-line overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub narratives_path: PathBuf,
    pub narrative_key: Option<String>,
    pub from_config: bool,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded narratives path
        config.narratives_path =
            Self::expand_path(&config.narratives_path).unwrap_or(config.narratives_path);

        Ok(Some(config))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/scrollyteller");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolve `[narratives-path] [narrative-key]` arguments (program name
    /// excluded) against the config file at `config_path`.
    ///
    /// A path argument replaces the configured path; a key argument replaces
    /// the configured default narrative.
    pub fn resolve_launch<P: AsRef<Path>>(
        args: &[String],
        config_path: P,
    ) -> Result<Launch, ConfigError> {
        let config_path = config_path.as_ref();
        match args {
            [path] => Ok(Launch {
                narratives_path: PathBuf::from(path),
                narrative_key: None,
                from_config: false,
            }),
            [path, key] => Ok(Launch {
                narratives_path: PathBuf::from(path),
                narrative_key: Some(key.clone()),
                from_config: false,
            }),
            [] => match Self::load_from_path(config_path)? {
                Some(config) => Ok(Launch {
                    narratives_path: config.narratives_path,
                    narrative_key: config.default_narrative,
                    from_config: true,
                }),
                None => Err(ConfigError::MissingConfig {
                    config_path: config_path.to_path_buf(),
                }),
            },
            _ => Err(ConfigError::Usage),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

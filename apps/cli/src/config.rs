use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "echo-worth.toml";
pub const DEFAULT_PRESETS_FILE: &str = "presets.csv";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub presets_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub output: Option<OutputFormat>,
}

impl Config {
    pub fn presets_path(&self) -> PathBuf {
        self.presets_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PRESETS_FILE))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

/// Reads `explicit` if given (it must exist), else `./echo-worth.toml` if present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::ConfigNotFound(path.display().to_string()));
            }
            read_config(path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_config(path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| CliError::ConfigParse(format!("{}: {}", path.display(), e)))?;

    // Relative preset paths resolve against the config file's directory.
    if let Some(presets) = config.presets_path.as_mut() {
        if presets.is_relative() {
            if let Some(parent) = path.parent() {
                *presets = parent.join(&*presets);
            }
        }
    }
    Ok(config)
}

use crate::error::{Result, SnipzError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Which palette the shell renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    /// Follow the system preference.
    Auto,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeMode {
    type Err = SnipzError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            other => Err(SnipzError::Api(format!(
                "Unknown theme '{}' (expected light, dark or auto)",
                other
            ))),
        }
    }
}

/// Configuration for snipz, stored in `config.json` in the config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Snippet file to use when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,

    #[serde(default)]
    pub theme: ThemeMode,
}

impl SnipzConfig {
    pub const KEYS: &'static [&'static str] = &["store-file", "theme"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| SnipzError::Io {
            path: config_path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SnipzError::Serialization {
            path: config_path,
            source,
        })
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(|source| SnipzError::Io {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(|source| SnipzError::Serialization {
                path: config_path.clone(),
                source,
            })?;
        fs::write(&config_path, content).map_err(|source| SnipzError::Io {
            path: config_path,
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "store-file" => Some(
                self.store_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "theme" => Some(self.theme.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "store-file" => {
                let value = value.trim();
                self.store_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            "theme" => {
                self.theme = value.parse()?;
                Ok(())
            }
            other => Err(SnipzError::Api(format!("Unknown config key: {}", other))),
        }
    }
}

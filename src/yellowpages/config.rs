use crate::error::{Result, YellowPagesError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "yellow_pages.txt";
const DEFAULT_PAGE_SIZE: usize = 10;

pub const KEYS: [&str; 2] = ["data-file", "page-size"];

/// Configuration for yellowpages, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YellowPagesConfig {
    /// Directory file; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Records per page when listing
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for YellowPagesConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl YellowPagesConfig {
    /// Load config from the given directory, or return defaults if not found.
    /// A zero `page_size` on disk is replaced by the default.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(YellowPagesError::Io)?;
        let mut config: YellowPagesConfig =
            serde_json::from_str(&content).map_err(YellowPagesError::Serialization)?;
        if config.page_size == 0 {
            warn!(
                path = %config_path.display(),
                default = DEFAULT_PAGE_SIZE,
                "page_size 0 in config, using the default"
            );
            config.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(YellowPagesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(YellowPagesError::Serialization)?;
        fs::write(config_path, content).map_err(YellowPagesError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = PathBuf::from(value);
                Ok(())
            }
            "page-size" => match value.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.page_size = n;
                    Ok(())
                }
                _ => Err(format!("page-size must be a positive integer, got {}", value)),
            },
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

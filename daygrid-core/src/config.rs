//! Global daygrid configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{DayGridError, DayGridResult};

static DEFAULT_DATA_DIR: &str = "~/.daygrid";
const DEFAULT_PAGE_SIZE: i64 = 10;
const DEFAULT_SERVER_PORT: u16 = 8000;
const EVENTS_FILE: &str = "events.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

/// Configuration at ~/.config/daygrid/config.toml, overridable with
/// `DAYGRID_*` environment variables (e.g. `DAYGRID_SERVER_PORT=9000`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DaygridConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Search page size when the caller doesn't ask for one.
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for DaygridConfig {
    fn default() -> Self {
        DaygridConfig {
            data_dir: default_data_dir(),
            page_size: DEFAULT_PAGE_SIZE,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl DaygridConfig {
    pub fn config_path() -> DayGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DayGridError::Config("Could not determine config directory".into()))?
            .join("daygrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if none exists.
    pub fn load() -> DayGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> DayGridResult<Self> {
        let config: DaygridConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("DAYGRID").try_parsing(true))
            .build()
            .map_err(|e| DayGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DayGridError::Config(e.to_string()))?;

        if config.page_size < 1 {
            return Err(DayGridError::Config(format!(
                "page_size must be at least 1 (got {})",
                config.page_size
            )));
        }

        Ok(config)
    }

    pub fn save(&self, path: &Path) -> DayGridResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| DayGridError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| DayGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn events_path(&self) -> PathBuf {
        self.data_path().join(EVENTS_FILE)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DayGridResult<()> {
        let contents = format!(
            "\
# daygrid configuration

# Where your events are stored:
# data_dir = \"{}\"

# Results per page when searching:
# page_size = {}

# Port for daygrid-server:
# server_port = {}
",
            DEFAULT_DATA_DIR, DEFAULT_PAGE_SIZE, DEFAULT_SERVER_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DayGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DayGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

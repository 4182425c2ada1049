//! Global configuration at ~/.config/secondbrain/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::ics::IcsOptions;

static DEFAULT_STORE_PATH: &str = "~/.local/share/secondbrain/store.json";
static DEFAULT_EXPORT_DIR: &str = ".";

fn default_store_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("secondbrain").join("store.json"),
        None => PathBuf::from(DEFAULT_STORE_PATH),
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SecondBrainConfig {
    /// JSON file holding the key-value store
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Where `.ics` exports are written
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Give every exported occurrence its own UID
    #[serde(default)]
    pub uid_per_occurrence: bool,
}

impl Default for SecondBrainConfig {
    fn default() -> Self {
        SecondBrainConfig {
            store_path: default_store_path(),
            export_dir: default_export_dir(),
            uid_per_occurrence: false,
        }
    }
}

impl SecondBrainConfig {
    pub fn config_path() -> CoreResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CoreError::Config("Could not determine config directory".into()))?
            .join("secondbrain");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (created with commented defaults if missing),
    /// then apply `SECONDBRAIN_*` environment overrides.
    pub fn load() -> CoreResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let config: SecondBrainConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("SECONDBRAIN"))
            .build()
            .map_err(|e| CoreError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CoreError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store_path)
    }

    /// Export directory with `~` expanded.
    pub fn export_dir(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    pub fn ics_options(&self) -> IcsOptions {
        IcsOptions {
            uid_per_occurrence: self.uid_per_occurrence,
        }
    }

    /// The effective settings, as they would be written in config.toml.
    pub fn to_toml(&self) -> CoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CoreResult<()> {
        let contents = format!(
            "\
# SecondBrain configuration

# Where your data is stored:
# store_path = \"{}\"

# Where calendar exports are written:
# export_dir = \"{}\"

# Give each exported occurrence of a recurring event its own UID:
# uid_per_occurrence = false
",
            DEFAULT_STORE_PATH, DEFAULT_EXPORT_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CoreError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

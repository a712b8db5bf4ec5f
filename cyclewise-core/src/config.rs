//! Global cyclewise configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{CycleWiseError, CycleWiseResult};
use crate::projector::DEFAULT_HORIZON_CYCLES;
use crate::store::FileStore;

static DEFAULT_DATA_PATH: &str = "~/.local/share/cyclewise";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_horizon_cycles() -> usize {
    DEFAULT_HORIZON_CYCLES
}

/// Configuration at ~/.config/cyclewise/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CycleWiseConfig {
    /// Where widget state is stored
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Number of cycles to predict
    #[serde(default = "default_horizon_cycles")]
    pub horizon_cycles: usize,
}

impl Default for CycleWiseConfig {
    fn default() -> Self {
        CycleWiseConfig {
            data_dir: default_data_dir(),
            horizon_cycles: default_horizon_cycles(),
        }
    }
}

impl CycleWiseConfig {
    pub fn config_path() -> CycleWiseResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CycleWiseError::Config("Could not determine config directory".into()))?
            .join("cyclewise");

        Ok(config_dir.join("config.toml"))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CycleWiseResult<()> {
        let contents = format!(
            "\
# cyclewise configuration

# Where your cycle, symptom and chat data live:
# data_dir = \"{}\"

# How many cycles to predict:
# horizon_cycles = {}
",
            DEFAULT_DATA_PATH, DEFAULT_HORIZON_CYCLES
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CycleWiseError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CycleWiseError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Loaded settings plus helpers for locating data.
#[derive(Debug, Clone)]
pub struct Settings {
    config: CycleWiseConfig,
}

impl Settings {
    /// Load from the default location, writing a commented-out config file
    /// on first run.
    pub fn load() -> CycleWiseResult<Self> {
        let config_path = CycleWiseConfig::config_path()?;

        if !config_path.exists() {
            CycleWiseConfig::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> CycleWiseResult<Self> {
        let config: CycleWiseConfig = Config::builder()
            .add_source(File::from(config_path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CycleWiseError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CycleWiseError::Config(e.to_string()))?;

        tracing::debug!(?config, path = %config_path.display(), "loaded config");

        Ok(Settings { config })
    }

    pub fn config(&self) -> &CycleWiseConfig {
        &self.config
    }

    pub fn horizon_cycles(&self) -> usize {
        self.config.horizon_cycles
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn open_store(&self) -> CycleWiseResult<FileStore> {
        FileStore::open(&self.data_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cyclewise/config.toml");

        CycleWiseConfig::create_default_config(&path).unwrap();
        let settings = Settings::load_from(&path).unwrap();

        assert_eq!(settings.config(), &CycleWiseConfig::default());
        assert_eq!(settings.horizon_cycles(), 6);
    }

    #[test]
    fn test_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let data_dir = dir.path().join("data");
        std::fs::write(
            &path,
            format!("data_dir = {:?}\nhorizon_cycles = 12\n", data_dir.to_string_lossy()),
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.horizon_cycles(), 12);
        assert_eq!(settings.data_path(), data_dir);
        assert_eq!(settings.open_store().unwrap().path(), data_dir.join("store.json"));
    }

    #[test]
    fn test_data_path_expands_tilde() {
        let settings = Settings {
            config: CycleWiseConfig::default(),
        };
        assert_eq!(settings.display_path(), PathBuf::from("~/.local/share/cyclewise"));
        assert!(!settings.data_path().to_string_lossy().starts_with('~'));
    }
}

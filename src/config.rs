use crate::{
    domain::{ListColor, Theme},
    error::{CardboardError, Result},
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application settings, read from a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme used while nobody is logged in
    pub theme: Theme,
    /// Accent preselected in the new-list dialog
    pub default_list_color: ListColor,
    pub log_level: String,
    /// Create a "Todo / Doing / Done" board when the store is empty
    pub seed_demo_board: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            default_list_color: ListColor::LightGreen,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed_demo_board: false,
        }
    }
}

impl Settings {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| CardboardError::ConfigError(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CardboardError::ConfigError(e.to_string()))
    }

    /// Loads settings from `path`, falling back to defaults when the file does not exist
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
        let settings = Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
        Ok(settings)
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

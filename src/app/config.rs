use super::keymap::KeyCombo;
use crate::domain::{Category, DEFAULT_RESULT_LIMIT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    /// Caps both browse and match results.
    pub result_limit: usize,
    pub open_combo: KeyCombo,
    /// Replaces first-seen bucket ordering when set.
    pub category_order: Option<Vec<Category>>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            open_combo: KeyCombo::default(),
            category_order: None,
        }
    }
}

impl PaletteConfig {
    /// Load from the default location, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_or_default(&path)
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded palette config");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {:#}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("cmdk");
        path.push("config.toml");
        path
    })
}

use crate::types::{FrameAnchor, OutputFormat};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub frame_anchor: FrameAnchor,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default = "default_show_progress")]
    pub show_progress: bool,
}

fn default_show_progress() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_anchor: FrameAnchor::default(),
            output_format: OutputFormat::default(),
            show_progress: default_show_progress(),
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "fasta-orf", "fasta-orf-tools")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load the user config, falling back to defaults when it is missing or
    /// unreadable.
    pub fn load() -> Self {
        match Self::path() {
            Some(config_path) if config_path.exists() => {
                Self::load_from(&config_path).unwrap_or_else(|e| {
                    tracing::warn!(path = %config_path.display(), error = %e, "ignoring config file");
                    Config::default()
                })
            }
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::path().context("Failed to determine config directory")?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

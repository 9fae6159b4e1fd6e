use crate::error::Field;
use crate::form::DEFAULT_REQUIRED_HOURS;
use crate::work::calculator::StatusTier;
use crate::work::duration::DurationHM;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FormConfig {
    /// Value `required_hours` is pre-filled with on a fresh or cleared form
    #[serde(default = "default_required_hours")]
    pub default_required_hours: String,
}

fn default_required_hours() -> String {
    DEFAULT_REQUIRED_HOURS.to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_required_hours: default_required_hours(),
        }
    }
}

/// Illustration shown for each status tier.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatusConfig {
    #[serde(default = "default_ahead")]
    pub ahead: String,
    #[serde(default = "default_halfway")]
    pub halfway: String,
    #[serde(default = "default_done")]
    pub done: String,
}

fn default_ahead() -> String {
    "gif1.gif".to_string()
}

fn default_halfway() -> String {
    "gif2.gif".to_string()
}

fn default_done() -> String {
    "gif3.gif".to_string()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            ahead: default_ahead(),
            halfway: default_halfway(),
            done: default_done(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for state directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

impl FormConfig {
    pub fn validate(&self) -> Result<()> {
        DurationHM::parse(Field::RequiredHours, &self.default_required_hours)
            .map_err(|e| anyhow::anyhow!("Invalid form.default_required_hours: {}", e))?;
        Ok(())
    }
}

impl StatusConfig {
    pub fn asset_for(&self, tier: StatusTier) -> &str {
        match tier {
            StatusTier::Ahead => &self.ahead,
            StatusTier::Halfway => &self.halfway,
            StatusTier::Done => &self.done,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.form.validate()?;
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load `~/.logout-clock/config.toml`, falling back to defaults when it does not exist.
pub fn load() -> Result<Config> {
    let config_path = crate::platform::config_path()?;

    if !config_path.exists() {
        tracing::debug!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    load_from_path(&config_path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}

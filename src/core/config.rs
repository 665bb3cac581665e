use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::monitor::{ThresholdPolicy, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_URGENT_HIGH};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Nightscout base URL, e.g. https://mysite.example.com
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_urgent_high")]
    pub urgent_high: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_low")]
    pub low: f64,
}

fn default_urgent_high() -> f64 {
    DEFAULT_URGENT_HIGH
}

fn default_high() -> f64 {
    DEFAULT_HIGH
}

fn default_low() -> f64 {
    DEFAULT_LOW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            urgent_high: DEFAULT_URGENT_HIGH,
            high: DEFAULT_HIGH,
            low: DEFAULT_LOW,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // If the file is empty or corrupted, return default config
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_json::from_str(&data).unwrap_or_default())
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("cgmon").join("config.json"))
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    pub fn threshold_policy(&self) -> ThresholdPolicy {
        ThresholdPolicy::new(self.urgent_high, self.high, self.low)
    }
}

use crate::error::{DeskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_UPCOMING_DAYS: u32 = 7;
const DEFAULT_RECENT_LIMIT: usize = 5;
const DEFAULT_CURRENCY: &str = "$";

/// Keys accepted by `config`, in display order.
pub const CONFIG_KEYS: &[&str] = &["upcoming-days", "recent-limit", "currency"];

/// Configuration for campaigndesk, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeskConfig {
    /// Window for the "coming up" dashboard metric and `report upcoming`
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// How many recent campaigns / next content items the dashboard shows
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Prefix for money amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_upcoming_days() -> u32 {
    DEFAULT_UPCOMING_DAYS
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            recent_limit: DEFAULT_RECENT_LIMIT,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl DeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeskError::Io)?;
        let config: DeskConfig =
            serde_json::from_str(&content).map_err(DeskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DeskError::Serialization)?;
        fs::write(config_path, content).map_err(DeskError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "upcoming-days" => Some(self.upcoming_days.to_string()),
            "recent-limit" => Some(self.recent_limit.to_string()),
            "currency" => Some(self.currency.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "upcoming-days" => self.upcoming_days = parse_count(key, value)?,
            "recent-limit" => self.recent_limit = parse_count(key, value)?,
            "currency" => self.currency = value.trim().to_string(),
            _ => return Err(DeskError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_count<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        DeskError::Config(format!(
            "{} expects a non-negative whole number, got {:?}",
            key, value
        ))
    })
}

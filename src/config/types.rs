use crate::nav::{Destination, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Startup and runtime defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Where navigation starts (default: root_view).
    #[serde(default)]
    pub destination: Destination,
    /// UI tick and input poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Navigation history settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of transitions kept (default: 50).
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_max_entries() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            destination: Destination::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            history: HistoryConfig::default(),
        }
    }
}

use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub global: GlobalConfig,
    pub probe: ProbeConfig,
    pub fetch: FetchConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub user_agent: String,
}

/// Settings for handle probing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub timeout_secs: u64,
    pub max_concurrent: usize,
}

/// Settings for job listing fetches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub timeout_secs: u64,
}

impl Config {
    /// Create a new default configuration
    pub fn default() -> Self {
        Self {
            global: GlobalConfig {
                user_agent: format!("jobhunt/{}", env!("CARGO_PKG_VERSION")),
            },
            probe: ProbeConfig {
                timeout_secs: 8,
                max_concurrent: 4,
            },
            fetch: FetchConfig {
                timeout_secs: 30,
            },
        }
    }

    /// Load configuration from a file or create default
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        crate::config::loader::load_config(config_path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let config_str = toml::to_string_pretty(self)?;
        std::fs::write(path, config_str)?;
        Ok(())
    }
}

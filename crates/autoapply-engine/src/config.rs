//! Run configuration, loaded from YAML.

use crate::wait::WaitParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// WebDriver server the session connects to.
    pub webdriver_url: String,
    pub wait: WaitConfig,
    pub generator: GeneratorConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            wait: WaitConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    pub timeout_ms: u64,
    pub interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 10_000,
            interval_ms: 250,
        }
    }
}

impl WaitConfig {
    pub fn params(&self) -> WaitParams {
        WaitParams::new(
            Duration::from_millis(self.timeout_ms),
            Duration::from_millis(self.interval_ms),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Completions endpoint of an OpenAI-compatible server.
    pub endpoint: String,
    pub model: String,
    pub request_timeout_ms: u64,
    pub max_tokens: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/v1/completions".to_string(),
            model: "gpt2".to_string(),
            request_timeout_ms: 90_000,
            max_tokens: 150,
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./autoapply.yaml
    /// 2. ~/.autoapply/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<RunConfig, ConfigError> {
        let local_config = PathBuf::from("./autoapply.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".autoapply").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        Ok(RunConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<RunConfig, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: RunConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

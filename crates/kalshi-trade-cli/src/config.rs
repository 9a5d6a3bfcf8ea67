/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed CLI configuration and a ready Kalshi client
[POS]:    Configuration layer - credentials and endpoint selection
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use kalshi_trade_adapter::http::{DEMO_BASE_URL, PRODUCTION_BASE_URL};
use kalshi_trade_adapter::{ClientConfig, Credentials, KalshiClient};
use serde::{Deserialize, Serialize};

/// Which Kalshi deployment to talk to when no explicit base URL is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Demo,
}

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// API key id shown in the Kalshi account settings
    pub key_id: String,
    /// PEM private key; relative paths resolve against the config file directory
    pub private_key_path: PathBuf,
    #[serde(default)]
    pub environment: Environment,
    /// Overrides `environment` when set
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&content).context("parse config YAML")?;

        if config.private_key_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.private_key_path = dir.join(&config.private_key_path);
            }
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        match (&self.base_url, self.environment) {
            (Some(url), _) => url.as_str(),
            (None, Environment::Production) => PRODUCTION_BASE_URL,
            (None, Environment::Demo) => DEMO_BASE_URL,
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url().to_string(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        Credentials::from_pem_file(&self.key_id, &self.private_key_path)
            .context("load API credentials")
    }

    pub fn build_client(&self) -> anyhow::Result<KalshiClient> {
        KalshiClient::with_config(self.credentials()?, self.client_config())
            .context("build Kalshi client")
    }
}

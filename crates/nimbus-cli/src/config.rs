//! Configuration loading and types

use std::path::{Path, PathBuf};

use eyre::WrapErr;
use serde::{Deserialize, Serialize};

use nimbus_client::DEFAULT_API_URL;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "NIMBUS_CONFIG";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API key sent as bearer token
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the provider API
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Region used when `--region` is not given
    #[serde(default)]
    pub default_region: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            default_region: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .wrap_err_with(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from the explicit path, the environment, default paths, or use
    /// defaults
    ///
    /// # Errors
    /// Returns error if a selected file cannot be read or parsed
    pub fn load_default(explicit: Option<&Path>) -> eyre::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(&PathBuf::from(path));
        }

        let paths = [
            Some(PathBuf::from("nimbus.toml")),
            dirs::config_dir().map(|p| p.join("nimbus/nimbus.toml")),
        ];

        for path in paths.into_iter().flatten() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(&path);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Apply `NIMBUS_API_KEY`, `NIMBUS_API_URL` and `NIMBUS_REGION` overrides
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(key) = set("NIMBUS_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(url) = set("NIMBUS_API_URL") {
            self.api_url = url;
        }
        if let Some(region) = set("NIMBUS_REGION") {
            self.default_region = Some(region);
        }
        self
    }

    /// Region to scope requests to: the flag if given, else the default
    #[must_use]
    pub fn region(&self, flag: Option<&str>) -> Option<String> {
        flag.filter(|region| !region.is_empty())
            .map(str::to_string)
            .or_else(|| self.default_region.clone())
    }
}

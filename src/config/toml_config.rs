use crate::adapters::nhtsa::DEFAULT_BASE_URL;
use crate::domain::ports::CatalogSettings;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_cache_ttl_seconds")]
    pub cache_ttl_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_cache_ttl_seconds() -> u64 {
    60 * 60
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            cache_ttl_seconds: default_cache_ttl_seconds(),
        }
    }
}

impl AppConfig {
    /// Loads settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; an unset variable is an error.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            QuoteError::ConfigError {
                message: format!("Invalid substitution pattern: {}", e),
            }
        })?;

        let mut result = String::with_capacity(content.len());
        let mut last = 0;
        for caps in re.captures_iter(content) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let value = std::env::var(name.as_str()).map_err(|_| QuoteError::ConfigError {
                message: format!("Environment variable not set: {}", name.as_str()),
            })?;
            result.push_str(&content[last..whole.start()]);
            result.push_str(&value);
            last = whole.end();
        }
        result.push_str(&content[last..]);
        Ok(result)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.base_url", &self.catalog.base_url)?;
        validate_positive_number("catalog.timeout_seconds", self.catalog.timeout_seconds, 1)?;
        validate_positive_number("catalog.cache_ttl_seconds", self.catalog.cache_ttl_seconds, 1)?;
        Ok(())
    }
}

impl CatalogSettings for AppConfig {
    fn base_url(&self) -> &str {
        &self.catalog.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_seconds)
    }

    fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.catalog.cache_ttl_seconds)
    }
}

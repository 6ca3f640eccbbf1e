//! Process configuration, read from the environment.
//!
//! | variable     | default   |
//! |--------------|-----------|
//! | `APP_HOST`   | `0.0.0.0` |
//! | `APP_PORT`   | `8080`    |
//! | `API_PREFIX` | none      |
//! | `LOG_FORMAT` | `json`    |

use thiserror::Error;

use enigma_observability::{LogConfig, LogFormat, ParseLogFormatError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got `{0}`")]
    InvalidPort(String),

    #[error("API_PREFIX must start with `/`, got `{0}`")]
    InvalidPrefix(String),

    #[error(transparent)]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
    api_prefix: Option<String>,
    log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            api_prefix: None,
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank values take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("APP_HOST") {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get("APP_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(prefix) = get("API_PREFIX") {
            config = config.with_api_prefix(prefix)?;
        }
        if let Some(format) = get("LOG_FORMAT") {
            config.log.format = format.parse::<LogFormat>()?;
        }

        Ok(config)
    }

    /// Mount everything under `prefix` (e.g. `/api/v1`). A bare `/` means no prefix.
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Result<Self, ConfigError> {
        let prefix = prefix.into();
        let trimmed = prefix.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            self.api_prefix = None;
            return Ok(self);
        }
        if !trimmed.starts_with('/') {
            return Err(ConfigError::InvalidPrefix(prefix));
        }
        self.api_prefix = Some(trimmed.to_string());
        Ok(self)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn api_prefix(&self) -> Option<&str> {
        self.api_prefix.as_deref()
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.api_prefix(), None);
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("API_PREFIX", "/api/v1/"),
            ("LOG_FORMAT", "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.api_prefix(), Some("/api/v1"));
        assert_eq!(config.log().format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_values() {
        let err = ServerConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));

        let err = ServerConfig::from_lookup(lookup(&[("API_PREFIX", "api")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrefix(_)));

        let err = ServerConfig::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }

    #[test]
    fn root_prefix_means_none() {
        let config = ServerConfig::default().with_api_prefix("/").unwrap();
        assert_eq!(config.api_prefix(), None);
    }
}

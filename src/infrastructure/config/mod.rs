//! Configuration loading for the remittance gateway.
//!
//! Supports JSON configuration files for:
//! - Server binding (host, port)
//! - Stream cadence and lifetime caps
//! - Gatekeeper cookie name and redirect targets
//! - Seeded exchange-rate overrides

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::CurrencyCode;

/// Root configuration for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway name/identifier
    #[serde(default = "default_gateway_name")]
    pub name: String,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Streaming broadcaster configuration
    #[serde(default)]
    pub stream: StreamConfig,

    /// Request gatekeeper configuration
    #[serde(default)]
    pub gatekeeper: GatekeeperConfig,

    /// Exchange-rate seeds overlaid on the default corridor table
    #[serde(default)]
    pub rates: Vec<RateSeedConfig>,
}

fn default_gateway_name() -> String {
    "Remesa Gateway".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            name: default_gateway_name(),
            server: ServerConfig::default(),
            stream: StreamConfig::default(),
            gatekeeper: GatekeeperConfig::default(),
            rates: Vec::new(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Streaming broadcaster configuration. Defaults match the production
/// contract: 3 s refresh, 5 min hard lifetime cap per connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    #[serde(default = "default_max_lifetime_ms")]
    pub max_lifetime_ms: u64,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_refresh_ms() -> u64 {
    3_000
}

fn default_max_lifetime_ms() -> u64 {
    300_000
}

fn default_channel_capacity() -> usize {
    16
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh_ms(),
            max_lifetime_ms: default_max_lifetime_ms(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

/// Request gatekeeper configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatekeeperConfig {
    /// Cookie checked for presence only; its value is never inspected here
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
    /// Query parameter carrying the original path through the login redirect
    #[serde(default = "default_redirect_param")]
    pub redirect_param: String,
}

fn default_session_cookie() -> String {
    "session_token".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

fn default_redirect_param() -> String {
    "redirect".to_string()
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            session_cookie: default_session_cookie(),
            login_path: default_login_path(),
            dashboard_path: default_dashboard_path(),
            redirect_param: default_redirect_param(),
        }
    }
}

/// One seeded exchange rate, expressed as units of `code` per 1 USD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSeedConfig {
    pub code: String,
    pub per_usd: Decimal,
}

impl RateSeedConfig {
    /// Validate and convert to a table entry.
    pub fn to_domain(&self) -> Result<(CurrencyCode, Decimal), ConfigError> {
        let code = CurrencyCode::new(&*self.code)
            .map_err(|e| ConfigError::InvalidRate(format!("{}: {}", self.code, e)))?;
        if self.per_usd <= Decimal::ZERO {
            return Err(ConfigError::InvalidRate(format!(
                "{}: per_usd must be positive",
                code
            )));
        }
        Ok((code, self.per_usd))
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid rate seed: {0}")]
    InvalidRate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_minimal_config() {
        let config = GatewayConfig::from_json("{}").unwrap();
        assert_eq!(config.name, "Remesa Gateway");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.stream.refresh_ms, 3_000);
        assert_eq!(config.stream.max_lifetime_ms, 300_000);
        assert_eq!(config.gatekeeper.session_cookie, "session_token");
        assert!(config.rates.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "name": "Test Gateway",
            "server": {
                "host": "127.0.0.1",
                "port": 9000
            },
            "stream": {
                "refresh_ms": 1000,
                "max_lifetime_ms": 60000
            },
            "gatekeeper": {
                "session_cookie": "sid",
                "login_path": "/entrar"
            },
            "rates": [
                { "code": "mxn", "per_usd": 18.5 },
                { "code": "ARS", "per_usd": 350 }
            ]
        }"#;

        let config = GatewayConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Test Gateway");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.stream.refresh_ms, 1000);
        assert_eq!(config.gatekeeper.session_cookie, "sid");
        assert_eq!(config.gatekeeper.login_path, "/entrar");
        // Unset gatekeeper fields keep their defaults.
        assert_eq!(config.gatekeeper.dashboard_path, "/dashboard");
        assert_eq!(config.rates.len(), 2);

        let (code, factor) = config.rates[0].to_domain().unwrap();
        assert_eq!(code.as_str(), "MXN");
        assert_eq!(factor, dec!(18.5));
    }

    #[test]
    fn rejects_non_positive_rate_seed() {
        let seed = RateSeedConfig {
            code: "MXN".to_string(),
            per_usd: dec!(0),
        };
        assert!(matches!(
            seed.to_domain(),
            Err(ConfigError::InvalidRate(_))
        ));
    }

    #[test]
    fn rejects_empty_seed_code() {
        let seed = RateSeedConfig {
            code: "  ".to_string(),
            per_usd: dec!(1),
        };
        assert!(matches!(
            seed.to_domain(),
            Err(ConfigError::InvalidRate(_))
        ));
    }
}

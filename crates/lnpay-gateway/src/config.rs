//! Configuration loaded from an env file and environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use lnpay_client::ClientConfig;

use crate::routes::RouterConfig;

/// Env file read at startup unless `LNPAY_GATEWAY_ENV_FILE` points elsewhere.
pub const DEFAULT_ENV_FILE: &str = "config/gateway.env";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Log sink settings.
    pub log: LogConfig,
    /// Upstream LNPay client settings.
    pub lnpay: ClientConfig,
    /// Running in production (disables request tracing).
    pub production: bool,
    /// Serve the OpenAPI document at `/docs`.
    pub docs_enabled: bool,
}

/// Log sink settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding the log file. Created if missing.
    pub path: PathBuf,
    /// Log file name.
    pub file: String,
    /// Minimum level (`trace`, `debug`, `info`, `warn`, `error`).
    pub level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `API_HOST` | Bind interface | `127.0.0.1` |
    /// | `API_PORT` | Bind port (`:8080` also accepted) | `8080` |
    /// | `API_LOGPATH` | Log directory | `/var/log/` |
    /// | `API_LOGFILE` | Log file name | `lnpay_gateway.log` |
    /// | `API_LOGLEVEL` | Log level | `trace` |
    /// | `LNPAY_API_KEY` | LNPay secret key | (required) |
    /// | `LNPAY_BASE_URL` | LNPay endpoint | `https://api.lnpay.co/v1` |
    /// | `LNPAY_TIMEOUT_SECS` | Upstream timeout | none |
    /// | `GATEWAY_ENV` | `production` disables request tracing | unset |
    /// | `GATEWAY_DISABLE_DOCS` | Hide `/docs` | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("API_HOST", "127.0.0.1");

        let port_raw = var("API_PORT", "8080");
        let port = port_raw
            .trim_start_matches(':')
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let log = LogConfig {
            path: PathBuf::from(var("API_LOGPATH", "/var/log/")),
            file: var("API_LOGFILE", "lnpay_gateway.log"),
            level: var("API_LOGLEVEL", "trace"),
        };

        let api_key = lookup("LNPAY_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let mut lnpay = ClientConfig::new(api_key);
        if let Some(base_url) = lookup("LNPAY_BASE_URL") {
            lnpay = lnpay.with_base_url(base_url);
        }
        if let Some(secs) = lookup("LNPAY_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(secs.clone()))?;
            lnpay = lnpay.with_timeout(Duration::from_secs(secs));
        }

        let production = lookup("GATEWAY_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let docs_enabled = !lookup("GATEWAY_DISABLE_DOCS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            log,
            lnpay,
            production,
            docs_enabled,
        })
    }

    /// Address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Router options derived from this configuration.
    pub fn router(&self) -> RouterConfig {
        RouterConfig {
            docs_enabled: self.docs_enabled,
            request_tracing: !self.production,
        }
    }
}

/// Load variables from the gateway env file, falling back to `.env`.
///
/// Returns the path that was loaded, if any. Variables already set in the
/// process environment win.
pub fn load_env_file() -> Option<PathBuf> {
    let path = env::var("LNPAY_GATEWAY_ENV_FILE").unwrap_or_else(|_| DEFAULT_ENV_FILE.to_string());
    dotenvy::from_filename(&path)
        .or_else(|_| dotenvy::dotenv())
        .ok()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid LNPAY_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),

    #[error("LNPAY_API_KEY environment variable is required")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("LNPAY_API_KEY", "pak_test")]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.log.path, PathBuf::from("/var/log/"));
        assert_eq!(config.log.file, "lnpay_gateway.log");
        assert_eq!(config.log.level, "trace");
        assert_eq!(config.lnpay.base_url, "https://api.lnpay.co/v1");
        assert_eq!(config.lnpay.api_key(), "pak_test");
        assert!(config.lnpay.timeout.is_none());
        assert!(!config.production);
        assert!(config.docs_enabled);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("LNPAY_API_KEY", "pak_test"),
            ("API_HOST", "0.0.0.0"),
            ("API_PORT", ":9090"),
            ("API_LOGPATH", "/tmp/gw"),
            ("API_LOGFILE", "gw.log"),
            ("API_LOGLEVEL", "warn"),
            ("LNPAY_BASE_URL", "http://localhost:4000/v1/"),
            ("LNPAY_TIMEOUT_SECS", "15"),
            ("GATEWAY_ENV", "production"),
            ("GATEWAY_DISABLE_DOCS", "1"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:9090");
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.lnpay.base_url, "http://localhost:4000/v1");
        assert_eq!(config.lnpay.timeout, Some(Duration::from_secs(15)));
        assert!(config.production);
        assert!(!config.docs_enabled);

        let router = config.router();
        assert!(!router.request_tracing);
        assert!(!router.docs_enabled);
    }

    #[test]
    fn test_missing_api_key() {
        let err = load(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("LNPAY_API_KEY", "pak"), ("API_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "http"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = load(&[("LNPAY_API_KEY", "pak"), ("LNPAY_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));
    }
}

//! Configuration types for lnpay-client.

use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::LnPayError;

/// Production LNPay API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.lnpay.co/v1";

/// Configuration for an LNPay client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the LNPay API, without a trailing slash.
    pub base_url: String,
    /// Optional per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Secret API key (`pak_...`).
    api_key: SecretString,
}

impl ClientConfig {
    /// Create a configuration for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Point the client at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `LNPAY_API_KEY` - Secret API key
    ///
    /// Optional:
    /// - `LNPAY_BASE_URL` - Default: https://api.lnpay.co/v1
    /// - `LNPAY_TIMEOUT_SECS` - Default: no timeout
    pub fn from_env() -> Result<Self, LnPayError> {
        let api_key = env::var("LNPAY_API_KEY")
            .map_err(|_| LnPayError::Config("LNPAY_API_KEY not set".to_string()))?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("LNPAY_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(secs) = env::var("LNPAY_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|e| LnPayError::Config(format!("Invalid LNPAY_TIMEOUT_SECS: {}", e)))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// URL of a single LNPay transaction.
    pub fn lntx_url(&self, id: &str) -> String {
        format!("{}/lntx/{}", self.base_url, urlencoding::encode(id))
    }

    /// URL of the wallet collection.
    pub fn wallets_url(&self) -> String {
        format!("{}/wallet", self.base_url)
    }

    /// Base resource URL of a single wallet.
    pub fn wallet_url(&self, key: &str) -> String {
        format!("{}/wallet/{}", self.base_url, urlencoding::encode(key))
    }

    /// URL of a default-node payments endpoint (`queryroutes`, `decodeinvoice`).
    pub fn node_payments_url(&self, action: &str) -> String {
        format!("{}/node/default/payments/{}", self.base_url, action)
    }
}

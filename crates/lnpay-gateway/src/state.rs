//! Application state shared across handlers.

use lnpay_client::LnPayClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Upstream LNPay client.
    pub client: LnPayClient,
}

impl AppState {
    /// Create new application state.
    pub fn new(client: LnPayClient) -> Self {
        Self { client }
    }
}

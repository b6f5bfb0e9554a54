//! Request bodies for wallet operations.

use serde::{Deserialize, Serialize};

use super::JsonMap;

/// Body of a wallet creation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWalletParams {
    /// Descriptive label for the new wallet.
    pub user_label: String,
}

/// Parameters for generating an invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceParams {
    /// Invoice description. Ignored by LNPay when `description_hash` is set.
    #[serde(default)]
    pub memo: String,

    /// Invoice amount in satoshis.
    pub num_satoshis: i64,

    /// Seconds until expiry. LNPay uses 86400 (one day) when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,

    /// Custom data echoed back on the resulting transaction.
    #[serde(default, rename = "passThru", skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<JsonMap>,

    /// Base64-encoded description hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_hash: Option<String>,
}

impl InvoiceParams {
    /// Create invoice params for an amount and memo.
    pub fn new(num_satoshis: i64, memo: impl Into<String>) -> Self {
        Self {
            memo: memo.into(),
            num_satoshis,
            ..Default::default()
        }
    }

    /// Set the expiry in seconds.
    pub fn with_expiry(mut self, seconds: i64) -> Self {
        self.expiry = Some(seconds);
        self
    }

    /// Attach pass-through data.
    pub fn with_pass_thru(mut self, pass_thru: JsonMap) -> Self {
        self.pass_thru = Some(pass_thru);
        self
    }

    /// Commit to a description hash instead of a memo.
    pub fn with_description_hash(mut self, hash: impl Into<String>) -> Self {
        self.description_hash = Some(hash.into());
        self
    }
}

/// Parameters for paying a BOLT11 invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayParams {
    /// The payment request to pay.
    pub payment_request: String,

    /// Custom data echoed back on the resulting transaction.
    #[serde(default, rename = "passThru", skip_serializing_if = "Option::is_none")]
    pub pass_thru: Option<JsonMap>,
}

impl PayParams {
    /// Create pay params for a payment request.
    pub fn new(payment_request: impl Into<String>) -> Self {
        Self {
            payment_request: payment_request.into(),
            pass_thru: None,
        }
    }

    /// Attach pass-through data.
    pub fn with_pass_thru(mut self, pass_thru: JsonMap) -> Self {
        self.pass_thru = Some(pass_thru);
        self
    }
}

/// Parameters for moving sats to another LNPay wallet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferParams {
    #[serde(default)]
    pub memo: String,

    pub num_satoshis: i64,

    /// Key or ID of the destination wallet.
    pub dest_wallet_id: String,
}

impl TransferParams {
    /// Create transfer params.
    pub fn new(dest_wallet_id: impl Into<String>, num_satoshis: i64, memo: impl Into<String>) -> Self {
        Self {
            memo: memo.into(),
            num_satoshis,
            dest_wallet_id: dest_wallet_id.into(),
        }
    }
}

//! Wallet snapshot types.

use serde::{Deserialize, Serialize};

use super::null_default;

/// Wallet state as reported by LNPay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet ID (`wal_...`).
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    /// Descriptive label chosen at creation.
    #[serde(default, deserialize_with = "null_default")]
    pub user_label: String,

    /// Creation time (unix seconds).
    #[serde(default, deserialize_with = "null_default")]
    pub created_at: i64,

    /// Last update time (unix seconds).
    #[serde(default, deserialize_with = "null_default")]
    pub updated_at: i64,

    /// Balance in satoshis.
    #[serde(default, deserialize_with = "null_default")]
    pub balance: i64,

    /// Wallet status.
    #[serde(default, deserialize_with = "null_default", rename = "statusType")]
    pub status_type: StatusType,

    /// Access keys. Only present on creation responses.
    #[serde(default, deserialize_with = "null_default")]
    pub access_keys: AccessKeys,
}

/// Keys granting different permission levels on a wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessKeys {
    #[serde(default, deserialize_with = "null_default", rename = "Wallet Admin")]
    pub wallet_admin: Vec<String>,

    #[serde(default, deserialize_with = "null_default", rename = "Wallet Invoice")]
    pub wallet_invoice: Vec<String>,

    #[serde(default, deserialize_with = "null_default", rename = "Wallet Read")]
    pub wallet_read: Vec<String>,
}

impl AccessKeys {
    /// The first admin key, which LNPay accepts for every wallet operation.
    pub fn admin(&self) -> Option<&str> {
        self.wallet_admin.first().map(String::as_str)
    }
}

/// Status classification attached to wallets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusType {
    #[serde(default, deserialize_with = "null_default", rename = "type")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_default")]
    pub display_name: String,
}

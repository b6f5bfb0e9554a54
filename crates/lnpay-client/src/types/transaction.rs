//! Lightning transaction and wallet ledger types.

use serde::{Deserialize, Serialize};

use super::{null_default, JsonMap, Wallet};

/// A Lightning invoice or payment tracked by LNPay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LnTx {
    /// Transaction ID (`lntx_...`).
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_default")]
    pub created_at: i64,

    /// Public key of the receiving node.
    #[serde(default)]
    pub dest_pubkey: Option<String>,

    /// BOLT11 payment request.
    #[serde(default, deserialize_with = "null_default")]
    pub payment_request: String,

    /// Hex-encoded payment hash.
    #[serde(default)]
    pub r_hash_decoded: Option<String>,

    #[serde(default)]
    pub memo: Option<String>,

    /// Base64 description hash, when the invoice commits to one.
    #[serde(default)]
    pub description_hash: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub num_satoshis: i64,

    /// Expiry in seconds from creation.
    #[serde(default, deserialize_with = "null_default")]
    pub expiry: i64,

    /// Absolute expiry time (unix seconds).
    #[serde(default)]
    pub expires_at: Option<i64>,

    /// Preimage, once the invoice is settled.
    #[serde(default)]
    pub payment_preimage: Option<String>,

    /// 1 when settled, 0 otherwise.
    #[serde(default, deserialize_with = "null_default")]
    pub settled: i64,

    #[serde(default)]
    pub settled_at: Option<i64>,

    #[serde(default, deserialize_with = "null_default")]
    pub is_keysend: bool,

    /// Keysend custom records, passed through as-is.
    #[serde(default)]
    pub custom_records: Option<JsonMap>,
}

impl LnTx {
    /// Whether the invoice has been paid.
    pub fn is_settled(&self) -> bool {
        self.settled != 0
    }
}

/// A ledger entry on a wallet: a send, receive or internal transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wtx {
    /// Wallet transaction ID (`wtx_...`).
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_default")]
    pub user_label: String,

    #[serde(default, deserialize_with = "null_default")]
    pub created_at: i64,

    /// Signed amount; negative for outgoing entries.
    #[serde(default, deserialize_with = "null_default")]
    pub num_satoshis: i64,

    /// The wallet this entry belongs to.
    #[serde(default, deserialize_with = "null_default")]
    pub wal: Wallet,

    #[serde(default, deserialize_with = "null_default", rename = "wtxType")]
    pub wtx_type: WtxType,

    /// Underlying Lightning transaction, absent for internal transfers.
    #[serde(default, rename = "lnTx")]
    pub ln_tx: Option<LnTx>,

    /// Caller data attached when the transaction was created.
    #[serde(default, rename = "passThru")]
    pub pass_thru: Option<JsonMap>,
}

/// Ledger entry classification (e.g. `ln_deposit`, `internal_transfer_out`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WtxType {
    /// `ln` or `internal`.
    #[serde(default, deserialize_with = "null_default")]
    pub layer: String,

    #[serde(default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_default")]
    pub display_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wtx_with_ln_tx_and_pass_thru() {
        let json = r#"{
            "id": "wtx_1",
            "user_label": "withdrawal",
            "created_at": 1588418045,
            "num_satoshis": -10,
            "wal": {"id": "wal_1", "user_label": "main", "balance": 90},
            "wtxType": {"layer": "ln", "name": "ln_withdrawal", "display_name": "LN Withdrawal"},
            "lnTx": {
                "id": "lntx_1",
                "payment_request": "lnbc100n1...",
                "num_satoshis": 10,
                "settled": 1,
                "custom_records": null,
                "memo": null
            },
            "passThru": {"zeta": 1, "alpha": {"nested": true}}
        }"#;

        let wtx: Wtx = serde_json::from_str(json).unwrap();
        assert_eq!(wtx.num_satoshis, -10);
        assert_eq!(wtx.wal.balance, 90);
        assert_eq!(wtx.wtx_type.name, "ln_withdrawal");

        let ln_tx = wtx.ln_tx.as_ref().unwrap();
        assert!(ln_tx.is_settled());
        assert!(ln_tx.custom_records.is_none());
        assert!(ln_tx.memo.is_none());

        let keys: Vec<&str> = wtx
            .pass_thru
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_internal_transfer_has_no_ln_tx() {
        let json = r#"{
            "id": "wtx_2",
            "num_satoshis": 5,
            "wtxType": {"layer": "internal", "name": "internal_transfer_in"},
            "lnTx": null
        }"#;
        let wtx: Wtx = serde_json::from_str(json).unwrap();
        assert!(wtx.ln_tx.is_none());
        assert_eq!(wtx.wtx_type.layer, "internal");
    }

    #[test]
    fn test_wtx_null_fields_decode_as_empty() {
        let json = r#"{
            "id": "wtx_3",
            "user_label": null,
            "created_at": 1588418045,
            "num_satoshis": null,
            "wal": null,
            "wtxType": {"layer": "ln", "name": null, "display_name": null},
            "lnTx": {
                "id": "lntx_3",
                "payment_request": null,
                "expiry": null,
                "settled": null,
                "is_keysend": null
            },
            "passThru": null
        }"#;

        let wtx: Wtx = serde_json::from_str(json).unwrap();
        assert_eq!(wtx.user_label, "");
        assert_eq!(wtx.num_satoshis, 0);
        assert_eq!(wtx.wal, Wallet::default());
        assert_eq!(wtx.wtx_type.layer, "ln");
        assert_eq!(wtx.wtx_type.name, "");
        assert!(wtx.pass_thru.is_none());

        let ln_tx = wtx.ln_tx.unwrap();
        assert_eq!(ln_tx.payment_request, "");
        assert_eq!(ln_tx.expiry, 0);
        assert!(!ln_tx.is_settled());
        assert!(!ln_tx.is_keysend);
    }
}

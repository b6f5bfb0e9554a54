//! Types returned by the default node's payment endpoints.
//!
//! LND reports most amounts as decimal strings; they are kept that way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::null_default;

/// A decoded BOLT11 payment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, deserialize_with = "null_default")]
    pub destination: String,

    #[serde(default, deserialize_with = "null_default")]
    pub payment_hash: String,

    #[serde(default, deserialize_with = "null_default")]
    pub num_satoshis: String,

    #[serde(default, deserialize_with = "null_default")]
    pub timestamp: String,

    #[serde(default, deserialize_with = "null_default")]
    pub expiry: String,

    #[serde(default, deserialize_with = "null_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_default")]
    pub cltv_expiry: String,

    #[serde(default, deserialize_with = "null_default")]
    pub route_hints: Vec<RouteHint>,

    #[serde(default, deserialize_with = "null_default")]
    pub payment_addr: String,

    #[serde(default, deserialize_with = "null_default")]
    pub num_msat: String,

    /// Feature bits keyed by bit number.
    #[serde(default, deserialize_with = "null_default")]
    pub features: BTreeMap<String, InvoiceFeature>,
}

/// Private route hint embedded in an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteHint {
    #[serde(default, deserialize_with = "null_default")]
    pub hop_hints: Vec<HopHint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopHint {
    #[serde(default, deserialize_with = "null_default")]
    pub node_id: String,

    #[serde(default, deserialize_with = "null_default")]
    pub chan_id: String,

    #[serde(default, deserialize_with = "null_default")]
    pub fee_proportional_millionths: i64,

    #[serde(default, deserialize_with = "null_default")]
    pub cltv_expiry_delta: i64,
}

/// A feature bit advertised by an invoice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFeature {
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_default")]
    pub is_known: bool,
}

/// Candidate routes to a destination node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRoutes {
    #[serde(default, deserialize_with = "null_default")]
    pub routes: Vec<Route>,

    /// Estimated probability that the best route succeeds.
    #[serde(default, deserialize_with = "null_default")]
    pub success_prob: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Total timelock across all hops.
    #[serde(default, deserialize_with = "null_default")]
    pub total_time_lock: i64,

    #[serde(default, deserialize_with = "null_default")]
    pub total_amt: String,

    #[serde(default, deserialize_with = "null_default")]
    pub hops: Vec<Hop>,

    /// Sum of fees, in millisatoshis.
    #[serde(default, deserialize_with = "null_default")]
    pub total_fees_msat: String,

    #[serde(default, deserialize_with = "null_default")]
    pub total_amt_msat: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hop {
    #[serde(default, deserialize_with = "null_default")]
    pub chan_id: String,

    #[serde(default, deserialize_with = "null_default")]
    pub chan_capacity: String,

    #[serde(default, deserialize_with = "null_default")]
    pub amt_to_forward: String,

    #[serde(default, deserialize_with = "null_default")]
    pub expiry: i64,

    #[serde(default, deserialize_with = "null_default")]
    pub amt_to_forward_msat: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_msat: Option<String>,

    #[serde(default, deserialize_with = "null_default")]
    pub pub_key: String,

    #[serde(default, deserialize_with = "null_default")]
    pub tlv_payload: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_routes_camel_case() {
        let json = r#"{
            "routes": [{
                "totalTimeLock": 650000,
                "totalAmt": "1000",
                "totalFeesMsat": "1001",
                "totalAmtMsat": "1001001",
                "hops": [{
                    "chanId": "7140",
                    "chanCapacity": "5000000",
                    "amtToForward": "1000",
                    "expiry": 649960,
                    "amtToForwardMsat": "1000000",
                    "pubKey": "03abc",
                    "tlvPayload": true
                }]
            }],
            "successProb": 0.95
        }"#;

        let routes: QueryRoutes = serde_json::from_str(json).unwrap();
        assert_eq!(routes.routes.len(), 1);
        let route = &routes.routes[0];
        assert_eq!(route.total_time_lock, 650000);
        assert_eq!(route.total_fees_msat, "1001");
        assert_eq!(route.hops[0].pub_key, "03abc");
        assert!(route.hops[0].fee_msat.is_none());
        assert!((routes.success_prob - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decoded_invoice_features() {
        let json = r#"{
            "destination": "03dest",
            "payment_hash": "abcd",
            "num_satoshis": "100",
            "description": "coffee",
            "route_hints": [{"hop_hints": [{"node_id": "02n", "chan_id": "1", "fee_proportional_millionths": 1, "cltv_expiry_delta": 40}]}],
            "features": {
                "9": {"name": "tlv-onion", "is_known": true},
                "15": {"name": "payment-addr", "is_known": true}
            }
        }"#;

        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.num_satoshis, "100");
        assert_eq!(invoice.route_hints[0].hop_hints[0].cltv_expiry_delta, 40);
        assert_eq!(invoice.features["15"].name, "payment-addr");
        assert!(invoice.features["9"].is_known);
    }

    #[test]
    fn test_null_collections_decode_as_empty() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"destination": "03dest", "description": null, "route_hints": null, "features": null}"#,
        )
        .unwrap();
        assert_eq!(invoice.destination, "03dest");
        assert_eq!(invoice.description, "");
        assert!(invoice.route_hints.is_empty());
        assert!(invoice.features.is_empty());

        let routes: QueryRoutes = serde_json::from_str(
            r#"{"routes": [{"totalAmt": null, "hops": null}], "successProb": null}"#,
        )
        .unwrap();
        assert_eq!(routes.routes[0].total_amt, "");
        assert!(routes.routes[0].hops.is_empty());
        assert_eq!(routes.success_prob, 0.0);
    }
}

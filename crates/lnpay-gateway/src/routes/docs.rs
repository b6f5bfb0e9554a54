//! OpenAPI description of the gateway.

use axum::Json;
use serde_json::{json, Value};

/// Serve the OpenAPI document.
pub async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

fn operation(summary: &str, tag: &str) -> Value {
    json!({
        "summary": summary,
        "tags": [tag],
        "responses": {
            "200": {"description": "Success"},
            "4XX": {"description": "Rejected by LNPay; body is the LNPay error object"},
            "502": {"description": "LNPay unreachable or returned a malformed response"}
        }
    })
}

fn wallet_key() -> Value {
    json!({"name": "key", "in": "path", "required": true, "schema": {"type": "string"}})
}

/// Build the OpenAPI 3 document listing every gateway route.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "LNPay Gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "HTTP gateway in front of the LNPay wallet API."
        },
        "paths": {
            "/ping": {
                "get": {
                    "summary": "Check that the gateway is up",
                    "tags": ["ping"],
                    "responses": {"200": {"description": "pong"}}
                }
            },
            "/wallets": {
                "post": operation("Create a wallet", "wallets")
            },
            "/wallets/{key}": {
                "parameters": [wallet_key()],
                "get": operation("Wallet details", "wallets")
            },
            "/wallets/{key}/transactions": {
                "parameters": [
                    wallet_key(),
                    {"name": "page", "in": "query", "schema": {"type": "integer", "default": 1}}
                ],
                "get": operation("Wallet transactions, 10 per page", "wallets")
            },
            "/wallets/{key}/invoice": {
                "parameters": [wallet_key()],
                "post": operation("Generate an invoice", "wallets")
            },
            "/wallets/{key}/pay": {
                "parameters": [wallet_key()],
                "post": operation("Pay a BOLT11 invoice", "wallets")
            },
            "/wallets/{key}/transfer": {
                "parameters": [wallet_key()],
                "post": operation("Transfer to another wallet", "wallets")
            },
            "/lntx/{id}": {
                "parameters": [{"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}],
                "get": operation("Look up a Lightning transaction", "node")
            },
            "/node/routes": {
                "parameters": [
                    {"name": "pub_key", "in": "query", "required": true, "schema": {"type": "string"}},
                    {"name": "amt", "in": "query", "required": true, "schema": {"type": "integer"}}
                ],
                "get": operation("Query payment routes", "node")
            },
            "/node/invoices/decode": {
                "parameters": [
                    {"name": "payment_request", "in": "query", "required": true, "schema": {"type": "string"}}
                ],
                "get": operation("Decode a payment request", "node")
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();
        for path in [
            "/ping",
            "/wallets",
            "/wallets/{key}",
            "/wallets/{key}/transactions",
            "/wallets/{key}/invoice",
            "/wallets/{key}/pay",
            "/wallets/{key}/transfer",
            "/lntx/{id}",
            "/node/routes",
            "/node/invoices/decode",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert!(doc["paths"]["/wallets/{key}/pay"]["post"].is_object());
    }
}

//! Route handlers for the gateway.

pub mod docs;
pub mod health;
pub mod node;
pub mod wallet;

use axum::http::Uri;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::GatewayError;
use crate::state::AppState;

/// Router options.
#[derive(Debug, Clone, Copy)]
pub struct RouterConfig {
    /// Serve the OpenAPI document at `/docs`.
    pub docs_enabled: bool,
    /// Log every request and response.
    pub request_tracing: bool,
}

/// Build the router with all routes.
pub fn router(config: RouterConfig) -> Router<AppState> {
    let mut router = Router::new()
        // Health check
        .route("/ping", get(health::ping))
        // Wallets
        .route("/wallets", post(wallet::create_wallet))
        .route("/wallets/:key", get(wallet::details))
        .route("/wallets/:key/transactions", get(wallet::transactions))
        .route("/wallets/:key/invoice", post(wallet::invoice))
        .route("/wallets/:key/pay", post(wallet::pay))
        .route("/wallets/:key/transfer", post(wallet::transfer))
        // Transactions and node payments
        .route("/lntx/:id", get(node::transaction))
        .route("/node/routes", get(node::query_routes))
        .route("/node/invoices/decode", get(node::decode_invoice));

    if config.docs_enabled {
        router = router.route("/docs", get(docs::openapi));
    }

    router = router.fallback(not_found);

    if config.request_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

async fn not_found(uri: Uri) -> GatewayError {
    GatewayError::NotFound(uri.path().to_string())
}

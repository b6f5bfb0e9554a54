//! Transaction lookup and default-node payment routes.

use axum::extract::{Path, Query, State};
use axum::Json;
use lnpay_client::{Invoice, LnTx, QueryRoutes};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;

/// Query string of the routes endpoint.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    pub pub_key: String,
    pub amt: u64,
}

/// Query string of the decode endpoint.
#[derive(Debug, Deserialize)]
pub struct DecodeQuery {
    pub payment_request: String,
}

/// Look up a Lightning transaction.
pub async fn transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LnTx>> {
    Ok(Json(state.client.transaction(&id).await?))
}

/// Candidate routes to a node.
pub async fn query_routes(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
) -> Result<Json<QueryRoutes>> {
    Ok(Json(state.client.query_routes(&query.pub_key, query.amt).await?))
}

/// Decode a payment request.
pub async fn decode_invoice(
    State(state): State<AppState>,
    Query(query): Query<DecodeQuery>,
) -> Result<Json<Invoice>> {
    Ok(Json(state.client.decode_invoice(&query.payment_request).await?))
}

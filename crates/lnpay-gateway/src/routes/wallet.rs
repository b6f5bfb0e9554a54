//! Wallet routes.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use lnpay_client::{
    CreateWalletParams, InvoiceParams, LnTx, PayParams, TransferParams, Wallet, Wtx,
};
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// Prefix of the LNPay headers describing a transactions page.
const PAGINATION_PREFIX: &str = "x-pagination-";

/// Query string of the transactions route.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

/// Create a wallet. Responds with the full snapshot, access keys included.
pub async fn create_wallet(
    State(state): State<AppState>,
    Json(params): Json<CreateWalletParams>,
) -> Result<(StatusCode, Json<Wallet>)> {
    let wallet = state.client.create_wallet(&params.user_label).await?;
    info!(wallet_id = %wallet.snapshot().id, "Wallet created");
    Ok((StatusCode::CREATED, Json(wallet.snapshot().clone())))
}

/// Current wallet state.
pub async fn details(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Wallet>> {
    let wallet = state.client.wallet(&key).details().await?;
    Ok(Json(wallet))
}

/// One page of ledger entries, with LNPay's pagination headers copied over.
pub async fn transactions(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<(HeaderMap, Json<Vec<Wtx>>)> {
    let page = state.client.wallet(&key).transactions(query.page).await?;
    Ok((pagination_headers(&page.headers), Json(page.transactions)))
}

/// Generate an invoice on the wallet.
pub async fn invoice(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(params): Json<InvoiceParams>,
) -> Result<(StatusCode, Json<LnTx>)> {
    let lntx = state.client.wallet(&key).invoice(&params).await?;
    info!(lntx_id = %lntx.id, sats = lntx.num_satoshis, "Invoice created");
    Ok((StatusCode::CREATED, Json(lntx)))
}

/// Pay a BOLT11 invoice from the wallet.
pub async fn pay(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(params): Json<PayParams>,
) -> Result<(StatusCode, Json<Wtx>)> {
    let wtx = state.client.wallet(&key).pay(&params).await?;
    info!(wtx_id = %wtx.id, sats = wtx.num_satoshis, "Invoice paid");
    Ok((StatusCode::CREATED, Json(wtx)))
}

/// Move sats to another LNPay wallet.
pub async fn transfer(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(params): Json<TransferParams>,
) -> Result<(StatusCode, Json<Wtx>)> {
    let wtx = state.client.wallet(&key).transfer(&params).await?;
    info!(wtx_id = %wtx.id, dest = %params.dest_wallet_id, "Transfer sent");
    Ok((StatusCode::CREATED, Json(wtx)))
}

fn pagination_headers(upstream: &HeaderMap) -> HeaderMap {
    upstream
        .iter()
        .filter(|(name, _)| name.as_str().starts_with(PAGINATION_PREFIX))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_pagination_headers_filter() {
        let mut upstream = HeaderMap::new();
        upstream.insert("x-pagination-total-count", HeaderValue::from_static("42"));
        upstream.insert("x-pagination-page-count", HeaderValue::from_static("5"));
        upstream.insert("set-cookie", HeaderValue::from_static("session=1"));

        let headers = pagination_headers(&upstream);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["x-pagination-total-count"], "42");
        assert!(headers.get("set-cookie").is_none());
    }
}

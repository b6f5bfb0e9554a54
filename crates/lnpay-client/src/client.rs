//! LNPay HTTP client.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{LnPayError, RemoteError, Result};
use crate::gate::{ExclusiveGate, MutationGate};
use crate::types::{CreateWalletParams, Invoice, LnTx, QueryRoutes, Wallet};
use crate::wallet::WalletHandle;

/// Header carrying the secret API key.
const API_KEY_HEADER: &str = "x-api-key";

/// A fully read HTTP response, detached from the connection.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Vec<u8>,
}

impl RawResponse {
    async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(LnPayError::Transport)?;

        Ok(Self {
            status,
            headers,
            body: body.to_vec(),
        })
    }

    /// Decode the body as `T`, or as a [`RemoteError`] when status >= 300.
    pub(crate) fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        if self.status.as_u16() >= 300 {
            let err = self.remote_error();
            warn!(
                status = err.status,
                name = %err.name,
                code = err.code,
                "LNPay rejected request: {}",
                err.message
            );
            return Err(LnPayError::Remote(err));
        }

        serde_json::from_slice(&self.body).map_err(|e| {
            warn!(status = self.status.as_u16(), "Malformed LNPay response: {}", e);
            LnPayError::Decode(e)
        })
    }

    fn remote_error(&self) -> RemoteError {
        RemoteError::from_response(self.status, &self.body)
    }
}

/// Client for the LNPay REST API.
///
/// Immutable after construction and cheap to clone; clones share the
/// connection pool and the mutation gate.
#[derive(Clone)]
pub struct LnPayClient {
    http: Client,
    config: Arc<ClientConfig>,
    gate: Arc<dyn MutationGate>,
}

impl LnPayClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from a full configuration.
    ///
    /// The client uses [`ExclusiveGate::process_wide`] unless another gate is
    /// installed with [`with_gate`](Self::with_gate).
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key())
            .map_err(|_| LnPayError::Config("API key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LnPayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config: Arc::new(config),
            gate: ExclusiveGate::process_wide(),
        })
    }

    /// Replace the gate used to serialize invoice, pay and transfer calls.
    pub fn with_gate(mut self, gate: Arc<dyn MutationGate>) -> Self {
        self.gate = gate;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up a Lightning transaction by ID.
    pub async fn transaction(&self, id: &str) -> Result<LnTx> {
        self.get(&self.config.lntx_url(id), &[]).await
    }

    /// Ask the default node for routes to `pub_key` carrying `amount` sats.
    pub async fn query_routes(&self, pub_key: &str, amount: u64) -> Result<QueryRoutes> {
        let amount = amount.to_string();
        self.get(
            &self.config.node_payments_url("queryroutes"),
            &[("pub_key", pub_key), ("amt", &amount)],
        )
        .await
    }

    /// Decode a BOLT11 payment request.
    pub async fn decode_invoice(&self, payment_request: &str) -> Result<Invoice> {
        self.get(
            &self.config.node_payments_url("decodeinvoice"),
            &[("payment_request", payment_request)],
        )
        .await
    }

    /// Create a wallet with a descriptive label.
    ///
    /// The returned handle is bound to the first admin key of the new wallet
    /// and carries the creation response as its snapshot.
    pub async fn create_wallet(&self, label: &str) -> Result<WalletHandle> {
        let params = CreateWalletParams {
            user_label: label.to_string(),
        };
        let wallet: Wallet = self.post(&self.config.wallets_url(), &params).await?;

        let admin_key = wallet
            .access_keys
            .admin()
            .ok_or(LnPayError::MissingAccessKey)?
            .to_string();
        debug!(wallet_id = %wallet.id, "Created wallet");

        Ok(WalletHandle::new(self.clone(), admin_key).with_snapshot(wallet))
    }

    /// Get a handle for an existing wallet.
    ///
    /// `key` may be the admin, invoice or read-only key; the provider decides
    /// which operations it allows.
    pub fn wallet(&self, key: &str) -> WalletHandle {
        WalletHandle::new(self.clone(), key)
    }

    /// Issue a GET and return the raw response.
    pub(crate) async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<RawResponse> {
        debug!("GET {}", url);
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        Self::send(request).await
    }

    /// Issue a GET and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.fetch(url, query).await?.decode()
    }

    /// Issue a POST outside the mutation gate.
    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        debug!("POST {}", url);
        Self::send(self.http.post(url).json(body)).await?.decode()
    }

    /// Issue a money-moving POST while holding the mutation gate.
    ///
    /// The gate covers sending the request and reading the body; decoding
    /// happens after it is released.
    pub(crate) async fn mutate<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let raw = {
            let _pass = self.gate.enter().await;
            debug!("POST {} (gated)", url);
            Self::send(self.http.post(url).json(body)).await
        }?;
        raw.decode()
    }

    async fn send(request: RequestBuilder) -> Result<RawResponse> {
        let response = request.send().await.map_err(LnPayError::Transport)?;
        RawResponse::read(response).await
    }
}

impl std::fmt::Debug for LnPayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LnPayClient")
            .field("config", &self.config)
            .finish()
    }
}

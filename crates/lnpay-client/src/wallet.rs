//! Wallet handle bound to one wallet's access key.

use reqwest::header::HeaderMap;
use tracing::debug;

use crate::client::LnPayClient;
use crate::error::Result;
use crate::types::{InvoiceParams, LnTx, PayParams, TransferParams, Wallet, Wtx};

/// Number of ledger entries requested per transactions page.
pub const TRANSACTIONS_PER_PAGE: u32 = 10;

/// One page of wallet ledger entries.
#[derive(Debug, Clone)]
pub struct TransactionPage {
    /// Entries on this page.
    pub transactions: Vec<Wtx>,
    /// Response headers as returned by LNPay, including its pagination
    /// metadata (`x-pagination-*`).
    pub headers: HeaderMap,
}

/// Handle to a single LNPay wallet.
///
/// The handle keeps a cached [`Wallet`] snapshot that is only refreshed by
/// [`update_balance`](Self::update_balance). Refreshing takes `&mut self`, so
/// sharing a handle between tasks that update it requires a lock on the
/// caller's side.
#[derive(Debug, Clone)]
pub struct WalletHandle {
    client: LnPayClient,
    key: String,
    url: String,
    snapshot: Wallet,
}

impl WalletHandle {
    pub(crate) fn new(client: LnPayClient, key: impl Into<String>) -> Self {
        let key = key.into();
        let url = client.config().wallet_url(&key);
        Self {
            client,
            key,
            url,
            snapshot: Wallet::default(),
        }
    }

    pub(crate) fn with_snapshot(mut self, snapshot: Wallet) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// The access key this handle authenticates wallet calls with.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Base resource URL (`{base}/wallet/{key}`).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Cached wallet state.
    pub fn snapshot(&self) -> &Wallet {
        &self.snapshot
    }

    /// Cached balance in satoshis.
    pub fn balance(&self) -> i64 {
        self.snapshot.balance
    }

    /// Cached wallet label.
    pub fn user_label(&self) -> &str {
        &self.snapshot.user_label
    }

    /// The client this handle issues calls through.
    pub fn client(&self) -> &LnPayClient {
        &self.client
    }

    /// Fetch the current wallet state. Leaves the cached snapshot untouched.
    pub async fn details(&self) -> Result<Wallet> {
        self.client.get(&self.url, &[]).await
    }

    /// Refresh the cached balance from [`details`](Self::details).
    ///
    /// Returns `true` if the balance changed.
    pub async fn update_balance(&mut self) -> Result<bool> {
        let wallet = self.details().await?;
        if wallet.balance == self.snapshot.balance {
            return Ok(false);
        }

        debug!(
            key = %self.key,
            old = self.snapshot.balance,
            new = wallet.balance,
            "Wallet balance changed"
        );
        self.snapshot.balance = wallet.balance;
        Ok(true)
    }

    /// Fetch one page of ledger entries, newest first.
    ///
    /// Pagination metadata is left in the returned headers for the caller to
    /// interpret.
    pub async fn transactions(&self, page: u32) -> Result<TransactionPage> {
        let url = format!("{}/transactions", self.url);
        let per_page = TRANSACTIONS_PER_PAGE.to_string();
        let page = page.to_string();

        let raw = self
            .client
            .fetch(&url, &[("per-page", &per_page), ("page", &page)])
            .await?;
        let transactions = raw.decode()?;

        Ok(TransactionPage {
            transactions,
            headers: raw.headers,
        })
    }

    /// Generate an invoice payable to this wallet.
    pub async fn invoice(&self, params: &InvoiceParams) -> Result<LnTx> {
        self.client
            .mutate(&format!("{}/invoice", self.url), params)
            .await
    }

    /// Pay a BOLT11 invoice from this wallet's balance.
    pub async fn pay(&self, params: &PayParams) -> Result<Wtx> {
        self.client
            .mutate(&format!("{}/withdraw", self.url), params)
            .await
    }

    /// Move sats from this wallet to another LNPay wallet.
    pub async fn transfer(&self, params: &TransferParams) -> Result<Wtx> {
        self.client
            .mutate(&format!("{}/transfer", self.url), params)
            .await
    }
}

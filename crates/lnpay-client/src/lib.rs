//! LNPay API client library.
//!
//! This crate provides a typed Rust client for the LNPay Lightning wallet
//! REST API. It supports:
//!
//! - Creating wallets and reading their balance and ledger
//! - Generating invoices, paying invoices and moving sats between wallets
//! - Looking up transactions, querying routes and decoding payment requests
//!
//! Invoice, pay and transfer calls pass through a [`MutationGate`]; by
//! default every client in the process shares one exclusive gate so that at
//! most one money-moving request is on the wire at a time.
//!
//! # Example
//!
//! ```no_run
//! use lnpay_client::{InvoiceParams, LnPayClient};
//!
//! # async fn example() -> Result<(), lnpay_client::LnPayError> {
//! let client = LnPayClient::new("pak_...")?;
//!
//! let mut wallet = client.create_wallet("tips").await?;
//! let invoice = wallet.invoice(&InvoiceParams::new(1_000, "coffee")).await?;
//! println!("Pay me: {}", invoice.payment_request);
//!
//! wallet.update_balance().await?;
//! println!("Balance: {} sats", wallet.balance());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gate;
pub mod types;
pub mod wallet;

pub use client::LnPayClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{LnPayError, RemoteError};
pub use gate::{ExclusiveGate, GatePass, MutationGate, NoopGate};
pub use reqwest::header::HeaderMap;
pub use types::*;
pub use wallet::{TransactionPage, WalletHandle, TRANSACTIONS_PER_PAGE};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

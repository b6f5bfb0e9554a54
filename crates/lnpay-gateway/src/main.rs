//! HTTP gateway in front of the LNPay wallet API.
//!
//! Exposes wallet creation, invoicing, payments, transfers and lookups as
//! local JSON routes, forwarding each call through `lnpay-client`.

mod config;
mod error;
mod logging;
mod routes;
mod state;

use lnpay_client::LnPayClient;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env file if present
    let env_file = config::load_env_file();

    // Load configuration
    let config = Config::from_env()?;
    let _guard = logging::init_logging(&config.log)?;

    match &env_file {
        Some(path) => info!(path = %path.display(), "Loaded env file"),
        None => warn!("No env file found, using process environment only"),
    }
    info!(
        addr = %config.bind_addr(),
        base_url = %config.lnpay.base_url,
        production = config.production,
        "Starting LNPay gateway"
    );

    // Build application state
    let client = LnPayClient::with_config(config.lnpay.clone())?;
    let state = AppState::new(client);

    // Build router
    let app = routes::router(config.router()).with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "LNPay gateway listening");
    axum::serve(listener, app).await?;

    Ok(())
}

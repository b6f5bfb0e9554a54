//! Error types for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lnpay_client::LnPayError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while serving a gateway request.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The upstream LNPay call failed.
    #[error(transparent)]
    LnPay(#[from] LnPayError),

    /// No route matched.
    #[error("Resource {0} not found.")]
    NotFound(String),
}

/// JSON body for errors raised by the gateway itself.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub message: String,
    pub error: String,
    pub status: u16,
    pub cause: Vec<String>,
}

impl ApiErrorBody {
    fn new(status: StatusCode, error: &str, message: String) -> Self {
        Self {
            message,
            error: error.to_string(),
            status: status.as_u16(),
            cause: Vec::new(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            GatewayError::LnPay(LnPayError::Remote(remote)) => {
                tracing::warn!(status = remote.status, name = %remote.name, "LNPay rejected request");
                let status = StatusCode::from_u16(remote.status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                return (status, Json(remote.clone())).into_response();
            }
            GatewayError::LnPay(LnPayError::Transport(err)) => {
                tracing::error!("LNPay unreachable: {}", err);
                (StatusCode::BAD_GATEWAY, "transport_error")
            }
            GatewayError::LnPay(LnPayError::Decode(err)) => {
                tracing::error!("Malformed LNPay response: {}", err);
                (StatusCode::BAD_GATEWAY, "decode_error")
            }
            GatewayError::LnPay(LnPayError::MissingAccessKey) => {
                tracing::error!("LNPay returned a wallet without an admin key");
                (StatusCode::BAD_GATEWAY, "missing_access_key")
            }
            GatewayError::LnPay(LnPayError::Config(msg)) => {
                tracing::error!("Client configuration error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
            GatewayError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        };

        let body = ApiErrorBody::new(status, error, self.to_string());
        (status, Json(body)).into_response()
    }
}

/// Result type for gateway handlers.
pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use lnpay_client::RemoteError;

    #[test]
    fn test_not_found_status() {
        let response = GatewayError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_remote_status_is_kept() {
        let err = GatewayError::from(LnPayError::Remote(RemoteError {
            name: "insufficient_balance".to_string(),
            message: "not enough sats".to_string(),
            code: 4,
            status: 402,
        }));
        assert_eq!(err.into_response().status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn test_remote_redirect_status_becomes_bad_gateway() {
        let err = GatewayError::from(LnPayError::Remote(RemoteError {
            name: "moved".to_string(),
            message: "moved".to_string(),
            code: 0,
            status: 301,
        }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_decode_error_is_bad_gateway() {
        let decode = serde_json::from_str::<u32>("x").unwrap_err();
        let err = GatewayError::from(LnPayError::Decode(decode));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}

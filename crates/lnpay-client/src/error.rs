//! Error types for lnpay-client.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when calling the LNPay API.
///
/// The three request outcomes are kept apart so callers can tell "the
/// request could not complete" ([`Transport`](Self::Transport)) from "the
/// response was malformed" ([`Decode`](Self::Decode)) from "the provider
/// rejected it" ([`Remote`](Self::Remote)).
#[derive(Debug, Error)]
pub enum LnPayError {
    /// Connection, DNS or TLS failure, or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered with HTTP status >= 300.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// A created wallet came back without an admin access key.
    #[error("Wallet response carried no admin access key")]
    MissingAccessKey,

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LnPayError {
    /// The provider error, if this failure is a remote rejection.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            LnPayError::Remote(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the request never completed.
    pub fn is_transport(&self) -> bool {
        matches!(self, LnPayError::Transport(_))
    }

    /// Whether the response body was malformed.
    pub fn is_decode(&self) -> bool {
        matches!(self, LnPayError::Decode(_))
    }
}

/// Error object returned by LNPay for any status >= 300.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct RemoteError {
    /// Machine-readable error name (e.g. `insufficient_balance`).
    #[serde(default)]
    pub name: String,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Provider error code.
    #[serde(default)]
    pub code: i64,

    /// HTTP status reported by the provider.
    #[serde(default)]
    pub status: u16,
}

impl RemoteError {
    /// Build an error from an HTTP status when the body is not an error object.
    pub fn from_status(status: reqwest::StatusCode, body: &[u8]) -> Self {
        Self {
            name: status
                .canonical_reason()
                .unwrap_or("unknown_error")
                .to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
            code: 0,
            status: status.as_u16(),
        }
    }

    /// Interpret the body of a response with status >= 300.
    ///
    /// The body is an LNPay error object when it is a JSON object carrying a
    /// string `name` or `message`; anything else is built with
    /// [`from_status`](Self::from_status). A `code` or `status` of the wrong
    /// type is ignored, and the HTTP status stands in for a missing or
    /// out-of-range `status`.
    pub fn from_response(status: reqwest::StatusCode, body: &[u8]) -> Self {
        let object = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(object)) => object,
            _ => return Self::from_status(status, body),
        };

        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        let (name, message) = match (text("name"), text("message")) {
            (None, None) => return Self::from_status(status, body),
            (name, message) => (name.unwrap_or_default(), message.unwrap_or_default()),
        };

        let reported = object
            .get("status")
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
            .filter(|s| (100..=599).contains(s))
            .unwrap_or_else(|| status.as_u16());

        Self {
            name,
            message,
            code: object.get("code").and_then(Value::as_i64).unwrap_or(0),
            status: reported,
        }
    }
}

/// Result type for LNPay operations.
pub type Result<T> = std::result::Result<T, LnPayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_is_message() {
        let err = RemoteError {
            name: "insufficient_balance".to_string(),
            message: "not enough sats".to_string(),
            code: 4,
            status: 402,
        };
        assert_eq!(err.to_string(), "not enough sats");
        assert_eq!(LnPayError::from(err).to_string(), "not enough sats");
    }

    #[test]
    fn test_remote_error_from_status() {
        let err = RemoteError::from_status(reqwest::StatusCode::BAD_GATEWAY, b"upstream down");
        assert_eq!(err.name, "Bad Gateway");
        assert_eq!(err.message, "upstream down");
        assert_eq!(err.code, 0);
        assert_eq!(err.status, 502);
    }

    #[test]
    fn test_from_response_error_object() {
        let body = br#"{"name":"insufficient_balance","message":"not enough sats","code":4,"status":402}"#;
        let err = RemoteError::from_response(reqwest::StatusCode::PAYMENT_REQUIRED, body);
        assert_eq!(err.name, "insufficient_balance");
        assert_eq!(err.message, "not enough sats");
        assert_eq!(err.code, 4);
        assert_eq!(err.status, 402);
    }

    #[test]
    fn test_from_response_object_without_name_or_message() {
        let err = RemoteError::from_response(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"boom"}"#,
        );
        assert_eq!(err.name, "Internal Server Error");
        assert!(err.message.contains("boom"));
        assert_eq!(err.status, 500);
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_from_response_non_object_json() {
        let err = RemoteError::from_response(reqwest::StatusCode::BAD_REQUEST, b"\"nope\"");
        assert_eq!(err.name, "Bad Request");
        assert_eq!(err.message, "\"nope\"");
    }

    #[test]
    fn test_from_response_keeps_fields_around_bad_status() {
        let body = br#"{"name":"insufficient_balance","message":"not enough sats","code":"x","status":-1}"#;
        let err = RemoteError::from_response(reqwest::StatusCode::PAYMENT_REQUIRED, body);
        assert_eq!(err.name, "insufficient_balance");
        assert_eq!(err.message, "not enough sats");
        assert_eq!(err.code, 0);
        assert_eq!(err.status, 402);
    }

    #[test]
    fn test_from_response_message_only() {
        let err = RemoteError::from_response(
            reqwest::StatusCode::UNAUTHORIZED,
            br#"{"message":"bad key","status":null}"#,
        );
        assert_eq!(err.name, "");
        assert_eq!(err.message, "bad key");
        assert_eq!(err.status, 401);
    }

    #[test]
    fn test_error_classification() {
        let decode: LnPayError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(decode.is_decode());
        assert!(!decode.is_transport());
        assert!(decode.remote().is_none());
    }
}

//! Health check endpoint.

/// Liveness check.
pub async fn ping() -> &'static str {
    "pong"
}

//! Types exchanged with the LNPay API.

mod node;
mod params;
mod transaction;
mod wallet;

pub use node::*;
pub use params::*;
pub use transaction::*;
pub use wallet::*;

/// Opaque JSON object passed through the API untouched.
///
/// Key order is preserved on round-trip.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Deserialize `null` as the field's default value.
///
/// LNPay sends `null` for many fields it has no value for. Pair with
/// `#[serde(default)]` so absent fields default as well.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    Ok(<Option<T> as serde::Deserialize>::deserialize(deserializer)?.unwrap_or_default())
}

//! Envelope types for the hsd RPC dialect.
//!
//! hsd exposes a bitcoind-style RPC interface on the root path of both the
//! node and wallet HTTP servers: a POST of `{method, params}` answered by
//! `{result, error}`. When `error` is present, `result` must be ignored
//! regardless of its value.

use serde::{Deserialize, Serialize};

/// RPC request envelope
#[derive(Debug, Serialize)]
pub(crate) struct RpcRequest {
    pub method: String,
    pub params: Vec<serde_json::Value>,
}

/// RPC response envelope.
///
/// `result` distinguishes an absent key (`None`) from an explicit `null`
/// (`Some(Value::Null)`): setters like `selectwallet` answer
/// `{"result": null, "error": null}` and that null is a valid result, not a
/// missing one.
#[derive(Debug, Deserialize)]
pub(crate) struct RpcResponse {
    #[serde(default, deserialize_with = "present_value")]
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
}

/// RPC error structure
#[derive(Debug, Deserialize)]
pub(crate) struct RpcError {
    pub message: String,
    pub code: i32,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

//! JSON-RPC 2.0 client for a single pNode.
//!
//! Wraps an HTTP POST transport around the pNode's `/rpc` endpoint. Each
//! client instance owns its own connection pool and request timeout; typed
//! accessors for individual RPC methods live in [`crate::pods`] and
//! [`crate::stats`].

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Default timeout for a single RPC request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

/// TCP port the pNode RPC endpoint listens on
pub const RPC_PORT: u16 = 6000;

/// JSON-RPC 2.0 request envelope
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
    id: u64,
}

/// JSON-RPC 2.0 response envelope
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

/// Application-level error embedded in a JSON-RPC response
#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// Client for one pNode's RPC endpoint
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

/// Build the RPC URL for a seed address
///
/// A bare IP or hostname gets the default RPC port appended; an explicit
/// `host:port` is used as-is.
fn endpoint_url(addr: &str) -> String {
    if addr.contains(':') {
        format!("http://{addr}/rpc")
    } else {
        format!("http://{addr}:{RPC_PORT}/rpc")
    }
}

impl RpcClient {
    /// Create a client for the pNode at `addr` with the default request timeout
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(addr: &str) -> Result<Self, ClientError> {
        Self::with_timeout(addr, DEFAULT_TIMEOUT)
    }

    /// Create a client for the pNode at `addr` with an explicit request timeout
    ///
    /// # Arguments
    ///
    /// * `addr` - pNode address, either a bare IP/host (default port 6000) or
    ///   an explicit `host:port`
    /// * `timeout` - bound on each RPC request, connection setup included
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_timeout(addr: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: endpoint_url(addr),
        })
    }

    /// RPC endpoint URL this client posts to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Perform one JSON-RPC call and return the raw `result` value
    ///
    /// Any non-success HTTP status, undecodable body, or application-level
    /// error in the response surfaces as a [`ClientError`]; the caller never
    /// needs to distinguish these for control flow.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-2xx status, a JSON-RPC error
    /// body, or a response with no result.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        let req = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id: 1,
        };

        let response = self.http.post(&self.url).json(&req).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body: RpcResponse = response.json().await?;

        if let Some(err) = body.error {
            return Err(ClientError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        body.result.ok_or(ClientError::MissingResult)
    }
}

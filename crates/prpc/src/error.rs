//! Error types for the pRPC client and discovery.

use thiserror::Error;

/// Errors from a single pNode RPC exchange
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failure (connection refused, DNS, request timeout)
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the pNode
    #[error("http error: {0}")]
    Status(reqwest::StatusCode),

    /// Application-level error embedded in the JSON-RPC response
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Human-readable error message from the pNode
        message: String,
    },

    /// Response carried neither a result nor an error
    #[error("rpc response missing result")]
    MissingResult,

    /// Result payload did not match the expected shape
    #[error("malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A per-seed failure recorded during discovery, for diagnostics only
#[derive(Debug, Clone)]
pub struct SeedFailure {
    /// Seed address that was queried
    pub seed: String,
    /// What went wrong, as reported by the client
    pub error: String,
}

/// Terminal discovery failures
///
/// Per-seed errors never surface here individually; a discovery call resolves
/// to a matching pod or to exactly one of these.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Every seed reported back and none held the target pubkey
    ///
    /// Seeds that failed with transport or protocol errors are folded into
    /// this outcome too; `failures` keeps their details for diagnostics.
    #[error("pNode {pubkey} not found on any of the seeds")]
    NotFound {
        /// The pubkey that was searched for
        pubkey: String,
        /// Per-seed failures observed while searching
        failures: Vec<SeedFailure>,
    },

    /// The deadline elapsed before a match was found or all seeds reported
    #[error("timed out waiting for pNode {pubkey} from seeds")]
    TimedOut {
        /// The pubkey that was searched for
        pubkey: String,
    },
}

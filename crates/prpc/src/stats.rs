//! Node statistics from a pNode.

use crate::client::RpcClient;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// Runtime statistics of a pNode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStats {
    /// Streams currently open
    pub active_streams: i64,

    /// CPU utilization, as a percentage
    pub cpu_percent: f64,

    /// Current gossip index
    pub current_index: i64,

    /// Size of the backing storage file, in bytes
    pub file_size: i64,

    /// Unix timestamp of the last stats refresh
    pub last_updated: i64,

    /// Packets received since startup
    pub packets_received: i64,

    /// Packets sent since startup
    pub packets_sent: i64,

    /// Total system RAM, in bytes
    pub ram_total: i64,

    /// RAM in use, in bytes
    pub ram_used: i64,

    /// Total bytes stored
    pub total_bytes: i64,

    /// Total storage pages
    pub total_pages: i64,

    /// Node uptime in seconds
    pub uptime: i64,
}

impl RpcClient {
    /// Retrieve runtime statistics from this pNode
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload does not decode.
    pub async fn get_stats(&self) -> Result<NodeStats, ClientError> {
        let result = self.call("get-stats", None).await?;
        Ok(serde_json::from_value(result)?)
    }
}

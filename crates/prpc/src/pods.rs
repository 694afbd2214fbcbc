//! Pod listings from a pNode.

use crate::client::RpcClient;
use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// A pod in the gossip network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    /// Network address of the pod
    pub address: String,

    /// Whether the pod is publicly reachable, if known
    pub is_public: Option<bool>,

    /// Unix timestamp of the last gossip sighting
    pub last_seen_timestamp: i64,

    /// Public key identifying the pod
    pub pubkey: String,

    /// Port of the pod's RPC endpoint
    pub rpc_port: u16,

    /// Storage committed to the network, in bytes
    pub storage_committed: i64,

    /// Fraction of committed storage in use, as a percentage
    pub storage_usage_percent: f64,

    /// Storage currently in use, in bytes
    pub storage_used: i64,

    /// Pod uptime in seconds
    pub uptime: i64,

    /// Software version reported by the pod
    pub version: String,
}

/// Response payload of the pod-listing RPC methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodsResponse {
    /// Pods known to the queried pNode, in the order it returned them
    pub pods: Vec<Pod>,

    /// Total pod count reported by the pNode
    pub total_count: usize,
}

impl RpcClient {
    /// Retrieve the list of pods known to this pNode
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload does not decode.
    pub async fn get_pods(&self) -> Result<PodsResponse, ClientError> {
        let result = self.call("get-pods", None).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Retrieve the list of pods with detailed statistics
    ///
    /// Same payload shape as [`get_pods`](Self::get_pods); the pNode fills in
    /// the storage and uptime fields from its stats collector.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the payload does not decode.
    pub async fn get_pods_with_stats(&self) -> Result<PodsResponse, ClientError> {
        let result = self.call("get-pods-with-stats", None).await?;
        Ok(serde_json::from_value(result)?)
    }
}

//! # pRPC
//!
//! Client for the pNode RPC interface of the Xandeum gossip network.
//!
//! This crate provides:
//! - A JSON-RPC 2.0 client over HTTP for a single pNode
//! - Typed accessors for pod listings and node statistics
//! - Seed-based pNode discovery (concurrent fan-out over bootstrap seeds)
//!
//! ## Discovery
//!
//! [`find_pnode`] queries every bootstrap seed concurrently for its pod list
//! and returns the first pod whose pubkey matches the target. The search is
//! bounded by a single deadline; seeds that fail or hold no match are logged
//! and skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use prpc::{FindPNodeOptions, find_pnode};
//!
//! # async fn run() -> Result<(), prpc::DiscoveryError> {
//! let pod = find_pnode("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM", FindPNodeOptions::default()).await?;
//! println!("found pod at {}", pod.address);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod discovery;
pub mod error;
pub mod pods;
pub mod seeds;
pub mod stats;

// Re-export commonly used types
pub use client::RpcClient;
pub use discovery::{FindPNodeOptions, find_pnode};
pub use error::{ClientError, DiscoveryError, SeedFailure};
pub use pods::{Pod, PodsResponse};
pub use seeds::{DEFAULT_SEED_IPS, resolve_seeds};
pub use stats::NodeStats;

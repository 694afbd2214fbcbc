//! Seed-based pNode discovery.
//!
//! Fans out one pod-listing query per bootstrap seed, races the outcomes
//! against a single deadline, and resolves to the first matching pod. Seeds
//! that fail or hold no match are diagnostic-only; the caller sees exactly
//! one terminal outcome per call.

use crate::client::RpcClient;
use crate::error::{ClientError, DiscoveryError, SeedFailure};
use crate::pods::Pod;
use crate::seeds::resolve_seeds;
use std::time::Duration;
use tokio::task::JoinSet;

/// Default bound on a whole discovery call
pub const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for [`find_pnode`]
#[derive(Debug, Clone, Default)]
pub struct FindPNodeOptions {
    /// Seeds appended to the defaults; ignored when `replace_seeds` is set
    pub add_seeds: Option<Vec<String>>,

    /// Seeds that fully replace the defaults; `Some(vec![])` replaces with
    /// nothing, which exhausts immediately
    pub replace_seeds: Option<Vec<String>>,

    /// Deadline for the whole search; defaults to
    /// [`DEFAULT_DISCOVERY_TIMEOUT`]
    pub timeout: Option<Duration>,

    /// Timeout for each individual seed request; defaults to the overall
    /// deadline, so both roles share one value unless tuned apart
    pub request_timeout: Option<Duration>,
}

impl FindPNodeOptions {
    /// Append seeds to the defaults
    #[must_use]
    pub fn with_add_seeds(mut self, seeds: Vec<String>) -> Self {
        self.add_seeds = Some(seeds);
        self
    }

    /// Replace the default seeds entirely
    #[must_use]
    pub fn with_replace_seeds(mut self, seeds: Vec<String>) -> Self {
        self.replace_seeds = Some(seeds);
        self
    }

    /// Set the overall discovery deadline
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the per-seed request timeout independently of the deadline
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// What one seed query reported back to the coordinator
#[derive(Debug)]
enum SeedOutcome {
    /// The seed's pod list held the target pubkey
    Match(Pod),
    /// The seed answered but no pod matched
    NoMatch { seed: String },
    /// The query failed; carries the seed address for diagnostics
    Failed { seed: String, error: ClientError },
}

/// Query one seed for the target pubkey
///
/// Exactly one request, no retries. The task owns its own client; the first
/// matching pod in response order wins.
async fn query_seed(seed: String, pubkey: String, timeout: Duration) -> SeedOutcome {
    let client = match RpcClient::with_timeout(&seed, timeout) {
        Ok(client) => client,
        Err(error) => return SeedOutcome::Failed { seed, error },
    };

    match client.get_pods().await {
        Ok(resp) => match resp.pods.into_iter().find(|pod| pod.pubkey == pubkey) {
            Some(pod) => SeedOutcome::Match(pod),
            None => SeedOutcome::NoMatch { seed },
        },
        Err(error) => SeedOutcome::Failed { seed, error },
    }
}

/// Locate a pod by pubkey via the bootstrap seeds
///
/// Resolves the effective seed list ([`resolve_seeds`]), spawns one query
/// task per seed, and waits on a race between task outcomes and the deadline:
///
/// - a match returns immediately
/// - a no-match or per-seed error is logged and the wait continues
/// - the deadline elapsing returns [`DiscoveryError::TimedOut`]
/// - all seeds reporting without a match returns [`DiscoveryError::NotFound`]
///
/// Returning drops the task set, which aborts any queries still in flight;
/// no background work outlives the call. When several seeds hold a pod with
/// the target pubkey, whichever answer arrives first is returned.
///
/// # Arguments
///
/// * `pubkey` - public key of the pod to locate (exact string match)
/// * `options` - seed overrides and timeouts, see [`FindPNodeOptions`]
///
/// # Errors
///
/// Returns [`DiscoveryError::TimedOut`] if the deadline elapses first, or
/// [`DiscoveryError::NotFound`] once every seed has reported without a match.
/// Individual seed failures are never surfaced on their own; `NotFound`
/// carries them as diagnostics.
pub async fn find_pnode(pubkey: &str, options: FindPNodeOptions) -> Result<Pod, DiscoveryError> {
    let deadline = options.timeout.unwrap_or(DEFAULT_DISCOVERY_TIMEOUT);
    let request_timeout = options.request_timeout.unwrap_or(deadline);
    let seeds = resolve_seeds(options.add_seeds.as_deref(), options.replace_seeds.as_deref());

    tracing::debug!("searching {} seeds for pNode {}", seeds.len(), pubkey);

    let mut tasks = JoinSet::new();
    for seed in seeds {
        tasks.spawn(query_seed(seed, pubkey.to_string(), request_timeout));
    }

    let timer = tokio::time::sleep(deadline);
    tokio::pin!(timer);

    let mut failures: Vec<SeedFailure> = Vec::new();

    while !tasks.is_empty() {
        tokio::select! {
            // An outcome that is already ready beats a simultaneous deadline
            biased;

            Some(joined) = tasks.join_next() => match joined {
                Ok(SeedOutcome::Match(pod)) => {
                    tracing::debug!("pNode {} found at {}", pubkey, pod.address);
                    return Ok(pod);
                }
                Ok(SeedOutcome::NoMatch { seed }) => {
                    tracing::debug!("seed {} holds no pod with pubkey {}", seed, pubkey);
                }
                Ok(SeedOutcome::Failed { seed, error }) => {
                    tracing::warn!("failed to get pods from seed {}: {}", seed, error);
                    failures.push(SeedFailure {
                        seed,
                        error: error.to_string(),
                    });
                }
                Err(join_error) => {
                    // JoinSet does not say which task failed; still counts
                    // as one consumed outcome
                    tracing::warn!("seed query task aborted: {}", join_error);
                    failures.push(SeedFailure {
                        seed: "unknown".to_string(),
                        error: join_error.to_string(),
                    });
                }
            },

            _ = &mut timer => {
                tracing::debug!(
                    "discovery deadline elapsed with {} seeds still pending",
                    tasks.len()
                );
                return Err(DiscoveryError::TimedOut {
                    pubkey: pubkey.to_string(),
                });
            }
        }
    }

    Err(DiscoveryError::NotFound {
        pubkey: pubkey.to_string(),
        failures,
    })
}

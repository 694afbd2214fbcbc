//! Bootstrap seed addresses and seed-set resolution.
//!
//! The default seed list is process-wide static configuration: loaded once,
//! never mutated. Discovery always works on a resolved list passed to it
//! explicitly, so the coordinator stays testable with arbitrary seed sets.

/// Built-in bootstrap seed addresses, queried when the caller supplies none
pub const DEFAULT_SEED_IPS: [&str; 8] = [
    "173.212.220.65",
    "161.97.97.41",
    "192.190.136.36",
    "192.190.136.38",
    "207.244.255.1",
    "192.190.136.28",
    "192.190.136.29",
    "173.212.203.145",
];

/// Resolve the effective seed list for one discovery call
///
/// Precedence:
/// 1. `replace` supplied (even empty) - it becomes the whole list, `add` is
///    ignored.
/// 2. `add` supplied - defaults followed by the additions, in order.
/// 3. Neither - the defaults as-is.
///
/// No deduplication is performed; a seed listed twice is queried twice.
#[must_use]
pub fn resolve_seeds(add: Option<&[String]>, replace: Option<&[String]>) -> Vec<String> {
    if let Some(replacement) = replace {
        return replacement.to_vec();
    }

    let mut seeds: Vec<String> = DEFAULT_SEED_IPS.iter().map(|s| s.to_string()).collect();
    if let Some(additions) = add {
        seeds.extend(additions.iter().cloned());
    }
    seeds
}

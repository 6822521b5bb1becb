//! JSON-RPC envelope construction

use std::sync::atomic::{AtomicU64, Ordering};
use types::{RelayMethod, RelayRequest};

/// Monotonic JSON-RPC id source, one per client instance
#[derive(Debug)]
pub struct RequestIdCounter {
    next: AtomicU64,
}

impl RequestIdCounter {
    /// Counter handing out ids from 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter handing out ids from `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next id. Concurrent callers never observe the same value.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RequestIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a request envelope, consuming one id whether or not it is sent
pub fn prepare_relay_request(
    ids: &RequestIdCounter,
    method: RelayMethod,
    params: serde_json::Value,
) -> RelayRequest {
    RelayRequest::new(ids.next_id(), method, params)
}

//! A small TTL cache for expensive full-table fetches.
//!
//! The dashboard's order list is re-requested on every navigation; fetching
//! the whole table each time is wasteful when nothing changed. The cache is
//! an explicit abstraction injected into the API state — the fetch layer
//! stays free of persistence concerns — and callers can bust it on demand
//! (the dashboard's manual refresh).
//!
//! Concurrent refreshes may race; the last writer wins, which is benign for
//! a cache of identical fetches.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct Entry<T> {
    stored_at: Instant,
    value: T,
}

/// Clock-expiring single-value cache.
#[derive(Clone)]
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Arc<RwLock<Option<Entry<T>>>>,
}

impl<T: Clone> TtlCache<T> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the cached value unless it is absent or older than the TTL.
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Stores a value, stamping it with the current time.
    pub async fn put(&self, value: T) {
        let mut slot = self.slot.write().await;
        *slot = Some(Entry {
            stored_at: Instant::now(),
            value,
        });
    }

    /// Drops the cached value, forcing the next `get` to miss.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}

//! Time-windowed reuse of per-venue fetch outcomes.
//!
//! The venues rate-limit their public book endpoints, so the most recent
//! outcome for each venue is reused within a configured window instead of
//! refetched. Failures are cached on the same terms as successes; a venue
//! that just refused a request is not asked again until the window expires.
//! The clock is injectable so expiry is testable without sleeping.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::exchange::{Exchange, RawBook};

use super::BookFetch;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// The real clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

struct CacheEntry {
    fetched_at: SystemTime,
    quote: Option<RawBook>,
}

/// Per-venue cache of the most recent fetch outcome.
pub struct SnapshotCache {
    entries: Mutex<HashMap<Exchange, CacheEntry>>,
    window: Duration,
    clock: Arc<dyn Clock>,
}

impl SnapshotCache {
    /// Creates a cache with the given reuse window, on the system clock.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, Arc::new(SystemClock))
    }

    /// Creates a cache on an explicit clock.
    #[must_use]
    pub fn with_clock(window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            window,
            clock,
        }
    }

    /// Returns the cached outcome for `exchange` while the last fetch is
    /// inside the reuse window; otherwise fetches fresh and caches whatever
    /// comes back.
    ///
    /// Fetch failures turn into `None` here. This is the boundary past
    /// which venue unavailability and an empty book are indistinguishable.
    /// The lock is never held across the fetch.
    pub async fn get_or_fetch(
        &self,
        exchange: Exchange,
        fetcher: &dyn BookFetch,
    ) -> Option<RawBook> {
        let now = self.clock.now();

        if let Some(cached) = self.fresh(exchange, now) {
            debug!(exchange = %exchange, "using cached snapshot");
            return cached;
        }

        let quote = match fetcher.fetch(exchange).await {
            Ok(raw) => Some(raw),
            Err(error) => {
                warn!(exchange = %exchange, error = %error, "snapshot fetch failed");
                None
            }
        };

        self.entries.lock().insert(
            exchange,
            CacheEntry {
                fetched_at: now,
                quote: quote.clone(),
            },
        );

        quote
    }

    /// Returns `Some(outcome)` when a cached entry exists and is still
    /// fresh. The inner option is the cached outcome itself; `Some(None)`
    /// means a failure was cached.
    fn fresh(&self, exchange: Exchange, now: SystemTime) -> Option<Option<RawBook>> {
        let entries = self.entries.lock();
        let entry = entries.get(&exchange)?;
        // A clock that moved backwards makes the entry look infinitely old,
        // which just forces a refetch.
        let age = now
            .duration_since(entry.fetched_at)
            .unwrap_or(Duration::MAX);
        (age < self.window).then(|| entry.quote.clone())
    }
}

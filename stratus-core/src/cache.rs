use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use stratus_types::{ProviderId, StatusReport};

struct Entry {
    report: StatusReport,
    fetched_at: Instant,
}

/// TTL-gated map from provider to its last successfully resolved report.
///
/// Invalidation is lazy: staleness is judged on read against the configured
/// freshness window, and entries are only ever superseded by a later `put`,
/// never actively evicted. Writes are unconditional overwrites, so two
/// racing refreshes for the same provider settle as last-write-wins.
pub struct StatusCache {
    entries: Mutex<HashMap<ProviderId, Entry>>,
    ttl: Duration,
}

impl StatusCache {
    /// Create an empty cache with the given freshness window.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// The report for `provider`, if present and still fresh.
    pub async fn get(&self, provider: ProviderId) -> Option<StatusReport> {
        let guard = self.entries.lock().await;
        guard
            .get(&provider)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.report.clone())
    }

    /// Whether a fresh entry exists for `provider`.
    pub async fn valid(&self, provider: ProviderId) -> bool {
        let guard = self.entries.lock().await;
        guard
            .get(&provider)
            .is_some_and(|entry| entry.fetched_at.elapsed() < self.ttl)
    }

    /// Store `report` for `provider`, overwriting any previous entry and
    /// restarting its freshness window.
    pub async fn put(&self, provider: ProviderId, report: StatusReport) {
        let mut guard = self.entries.lock().await;
        guard.insert(
            provider,
            Entry {
                report,
                fetched_at: Instant::now(),
            },
        );
    }
}

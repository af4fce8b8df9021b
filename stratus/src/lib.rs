//! Stratus aggregates health status across multiple cloud providers.
//!
//! Overview
//! - Resolves each provider through an ordered list of candidate sources
//!   (status pages, incident feeds, JSON APIs) with retrying HTTP fetches.
//! - Normalizes every source format into one [`StatusReport`] shape.
//! - Caches resolved reports for a freshness window and serves
//!   fresh-or-cached results without re-fetching.
//! - Fans out cache misses concurrently and isolates per-provider failures:
//!   one provider's outage, scrape failure, or even task panic never
//!   touches another provider's slot.
//!
//! Key behaviors and trade-offs
//! - Source fallback: candidates are tried in priority order and the first
//!   body wins; deterministic and economical, but a lower-priority source
//!   is never consulted once a body parses (or fails to parse).
//! - Optimistic degradation: when every source for a provider is
//!   unreachable, the provider is assumed healthy and the report carries a
//!   `note` marking it unverified. A monitor whose own scrape fails must
//!   not fabricate a provider outage.
//! - Caching: best-effort TTL with lazy read-time invalidation. Overlapping
//!   refreshes for one provider may both fetch; the cache settles the race
//!   last-write-wins, which only ever affects freshness.
//!
//! Building an aggregator and fetching reports:
//! ```rust,ignore
//! use stratus::Stratus;
//!
//! let stratus = Stratus::builder()
//!     .cache_duration(std::time::Duration::from_secs(120))
//!     .build()?;
//!
//! let all = stratus.get_all().await;
//! let aws = stratus.get_provider_status("aws").await;
//! stratus.shutdown();
//! ```
//!
//! See `stratus/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Stratus, StratusBuilder};

// Re-export the engine seam and domain types for convenience
pub use stratus_core::{Fetch, HttpFetcher, StatusCache, default_sources};
pub use stratus_types::{
    OverallStatus, ProviderId, RetryPolicy, ServiceEntry, ServiceStatus, SourceConfig,
    SourceFormat, StatusError, StatusReport, StratusConfig,
};

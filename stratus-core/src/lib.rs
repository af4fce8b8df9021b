//! stratus-core
//!
//! The status-aggregation engine shared by the `stratus` orchestrator.
//!
//! - `fetch`: HTTP retrieval with linear-backoff retry over one pooled client.
//! - `parse`: total parsers turning raw bodies into normalized reports.
//! - `registry`: the built-in provider → candidate-source roster.
//! - `resolve`: per-provider source fallback with an optimistic default.
//! - `cache`: the TTL-gated report cache with lazy read-time invalidation.
//!
//! Async runtime (Tokio)
//! ---------------------
//! The engine assumes the Tokio ecosystem: retry backoff suspends through
//! `tokio::time::sleep` and the cache lock is a `tokio::sync::Mutex`, so all
//! entry points must run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// TTL-gated report cache.
pub mod cache;
/// HTTP retrieval with retry; the `Fetch` transport seam.
pub mod fetch;
/// Format-specific body parsers.
pub mod parse;
/// Built-in provider source roster.
pub mod registry;
/// Per-provider source-fallback resolution.
pub mod resolve;

pub use cache::StatusCache;
pub use fetch::{Fetch, HttpFetcher};
pub use registry::default_sources;
pub use resolve::resolve;

pub use stratus_types::{
    OverallStatus, ProviderId, RetryPolicy, ServiceEntry, ServiceStatus, SourceConfig,
    SourceFormat, StatusError, StatusReport, StratusConfig,
};

//! Configuration types shared between the orchestrator and the core engine.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::provider::ProviderId;

/// Retry behavior applied to each candidate-source fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts per url, 1-indexed; the first request counts.
    pub max_attempts: u32,
    /// Backoff unit; attempt `n` waits `n * base_backoff` before retrying.
    pub base_backoff: Duration,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Format family a candidate source is parsed with.
///
/// Deliberately closed: every variant has exactly one parser behind it, and
/// adding a variant must force the dispatch site to grow a parser with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// HTML-shaped page classified by keyword markers.
    Heuristic,
    /// RSS/Atom incident feed.
    Feed,
    /// JSON incident document.
    Structured,
}

/// One candidate status endpoint for a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint url.
    pub url: String,
    /// Parser family for bodies fetched from this url.
    pub format: SourceFormat,
}

impl SourceConfig {
    /// Build a source entry.
    pub fn new(url: impl Into<String>, format: SourceFormat) -> Self {
        Self {
            url: url.into(),
            format,
        }
    }
}

/// Global configuration for the `Stratus` orchestrator.
///
/// Defaults mirror the reference deployment: five-minute cache, ten-second
/// HTTP timeout, three attempts per url, and a desktop-browser User-Agent
/// (several provider status pages refuse obviously non-browser clients).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratusConfig {
    /// Freshness window for cached reports.
    pub cache_duration: Duration,
    /// Retry behavior for every candidate-source fetch.
    pub retry: RetryPolicy,
    /// Outbound User-Agent header.
    pub user_agent: String,
    /// Per-provider source lists replacing the built-in roster. Providers
    /// absent from the map keep their defaults.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub source_overrides: HashMap<ProviderId, Vec<SourceConfig>>,
}

impl Default for StratusConfig {
    fn default() -> Self {
        Self {
            cache_duration: Duration::from_secs(300),
            retry: RetryPolicy::default(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            source_overrides: HashMap::new(),
        }
    }
}

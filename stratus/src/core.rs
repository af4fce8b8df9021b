use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use stratus_core::cache::StatusCache;
use stratus_core::fetch::{Fetch, HttpFetcher};
use stratus_core::registry;
use stratus_types::{ProviderId, SourceConfig, StatusError, StratusConfig};

/// Orchestrator that serves fresh-or-cached status across providers.
///
/// Owns the pooled HTTP transport and the report cache as explicit instance
/// state; hosts construct one and pass it by reference to their dispatch
/// layer. No process-wide singleton exists.
pub struct Stratus {
    pub(crate) fetcher: Arc<dyn Fetch>,
    pub(crate) cache: StatusCache,
    pub(crate) providers: Vec<ProviderId>,
    pub(crate) sources: HashMap<ProviderId, Vec<SourceConfig>>,
}

impl std::fmt::Debug for Stratus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stratus")
            .field("providers", &self.providers)
            .field("sources", &self.sources)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `Stratus` orchestrator with custom configuration.
pub struct StratusBuilder {
    cfg: StratusConfig,
    providers: Vec<ProviderId>,
    fetcher: Option<Arc<dyn Fetch>>,
}

impl Default for StratusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StratusBuilder {
    /// Create a new builder with the reference deployment defaults: the
    /// full provider roster, a five-minute cache, and three fetch attempts
    /// per source url.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: StratusConfig::default(),
            providers: ProviderId::ALL.to_vec(),
            fetcher: None,
        }
    }

    /// Replace the whole configuration in one step.
    #[must_use]
    pub fn config(mut self, cfg: StratusConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the freshness window for cached reports.
    #[must_use]
    pub const fn cache_duration(mut self, window: Duration) -> Self {
        self.cfg.cache_duration = window;
        self
    }

    /// Set the per-request HTTP timeout.
    #[must_use]
    pub const fn http_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.retry.timeout = timeout;
        self
    }

    /// Set the total attempts per source url (1-indexed; the first request
    /// counts as an attempt).
    #[must_use]
    pub const fn max_retries(mut self, attempts: u32) -> Self {
        self.cfg.retry.max_attempts = attempts;
        self
    }

    /// Set the linear backoff unit between failed attempts.
    #[must_use]
    pub const fn base_backoff(mut self, unit: Duration) -> Self {
        self.cfg.retry.base_backoff = unit;
        self
    }

    /// Set the outbound User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.cfg.user_agent = user_agent.into();
        self
    }

    /// Restrict the roster to a subset of providers.
    ///
    /// Later entries duplicating earlier ones are dropped; the remaining
    /// order is the order reports are produced in.
    #[must_use]
    pub fn providers(mut self, providers: &[ProviderId]) -> Self {
        self.providers = providers.to_vec();
        self
    }

    /// Replace the candidate source list for one provider.
    ///
    /// Providers without an override keep the built-in roster. Intended for
    /// tests and deployments that front the public status pages.
    #[must_use]
    pub fn sources(mut self, provider: ProviderId, sources: Vec<SourceConfig>) -> Self {
        self.cfg.source_overrides.insert(provider, sources);
        self
    }

    /// Substitute the transport, bypassing the pooled HTTP client.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Build the `Stratus` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidConfig` when the roster is empty, the retry policy
    /// allows zero attempts, an override lists no sources, or the HTTP
    /// client cannot be constructed from the configuration.
    pub fn build(mut self) -> Result<Stratus, StatusError> {
        // Dedup the roster, first occurrence wins.
        let mut seen = std::collections::HashSet::new();
        self.providers.retain(|p| seen.insert(*p));

        if self.providers.is_empty() {
            return Err(StatusError::InvalidConfig(
                "no providers configured; add at least one via providers(...)".to_string(),
            ));
        }
        if self.cfg.retry.max_attempts == 0 {
            return Err(StatusError::InvalidConfig(
                "max_retries must allow at least one attempt".to_string(),
            ));
        }
        for (provider, sources) in &self.cfg.source_overrides {
            if sources.is_empty() {
                return Err(StatusError::InvalidConfig(format!(
                    "source override for {provider} lists no sources"
                )));
            }
        }

        let fetcher = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpFetcher::new(self.cfg.retry, &self.cfg.user_agent)?),
        };

        let mut overrides = self.cfg.source_overrides;
        let sources = self
            .providers
            .iter()
            .map(|&p| {
                let list = overrides
                    .remove(&p)
                    .unwrap_or_else(|| registry::default_sources(p));
                (p, list)
            })
            .collect();

        Ok(Stratus {
            fetcher,
            cache: StatusCache::new(self.cfg.cache_duration),
            providers: self.providers,
            sources,
        })
    }
}

impl Stratus {
    /// Start building a new `Stratus` instance.
    ///
    /// Typical usage chains configuration and source overrides, e.g.:
    ///
    /// ```rust,ignore
    /// let stratus = stratus::Stratus::builder()
    ///     .cache_duration(std::time::Duration::from_secs(120))
    ///     .max_retries(2)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> StratusBuilder {
        StratusBuilder::new()
    }

    pub(crate) fn sources_for(&self, provider: ProviderId) -> &[SourceConfig] {
        self.sources.get(&provider).map_or(&[], Vec::as_slice)
    }

    /// Release the pooled connection resource.
    ///
    /// Consuming `self` makes the release single-shot by construction, and
    /// dropping an orchestrator without calling this is equally safe: the
    /// transport is released on every exit path. Safe to call on an
    /// instance whose transport never issued a request.
    pub fn shutdown(self) {
        tracing::debug!("status aggregator shut down");
        drop(self);
    }
}

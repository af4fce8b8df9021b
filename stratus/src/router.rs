use std::collections::HashMap;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use stratus_core::resolve;
use stratus_types::{ProviderId, StatusError, StatusReport};

use crate::Stratus;

impl Stratus {
    /// Fetch the status of every configured provider.
    ///
    /// Behavior and trade-offs:
    /// - Valid cache entries are returned unchanged; no fetch is triggered
    ///   for them. Every miss or stale entry becomes one concurrent resolve
    ///   task, at most one per provider per call.
    /// - Failures are isolated per slot: a provider whose resolve errors,
    ///   or whose task panics, yields an error report in its own slot while
    ///   sibling results are returned untouched.
    /// - Dropping the returned future cancels in-flight resolves at their
    ///   next suspension point; nothing is detached to a background task.
    pub async fn get_all(&self) -> HashMap<ProviderId, StatusReport> {
        let mut results = HashMap::with_capacity(self.providers.len());
        let mut pending = Vec::new();

        for &provider in &self.providers {
            match self.cache.get(provider).await {
                Some(report) => {
                    tracing::info!(provider = %provider, "serving cached report");
                    results.insert(provider, report);
                }
                None => pending.push(provider),
            }
        }

        let tasks = pending.into_iter().map(|provider| async move {
            let outcome = AssertUnwindSafe(self.refresh(provider))
                .catch_unwind()
                .await;
            (provider, outcome)
        });

        for (provider, outcome) in futures::future::join_all(tasks).await {
            let report = outcome.unwrap_or_else(|panic| {
                let msg = panic_message(panic.as_ref());
                tracing::error!(provider = %provider, msg, "provider task panicked");
                StatusReport::failed(
                    provider,
                    StatusError::provider_task(provider.display_name(), msg).to_string(),
                )
            });
            results.insert(provider, report);
        }

        results
    }

    /// Fetch one provider's status with the same cache-then-resolve logic.
    pub async fn get_one(&self, provider: ProviderId) -> StatusReport {
        if let Some(report) = self.cache.get(provider).await {
            tracing::info!(provider = %provider, "serving cached report");
            return report;
        }
        self.refresh(provider).await
    }

    /// Fetch one provider's status by name, case-insensitively.
    ///
    /// An unknown name yields an error report rather than an `Err`, so the
    /// dispatch layer renders it through the same path as any other report.
    pub async fn get_provider_status(&self, name: &str) -> StatusReport {
        match name.parse::<ProviderId>() {
            Ok(provider) => self.get_one(provider).await,
            Err(_) => {
                tracing::warn!(name, "rejected status request");
                StatusReport::unsupported(name.trim())
            }
        }
    }

    /// Resolve `provider` now and write the result through to the cache.
    ///
    /// Error reports are never cached: a failed verification must not
    /// suppress retries for the whole freshness window. Assumed-healthy
    /// defaults are deliberate answers and are kept.
    async fn refresh(&self, provider: ProviderId) -> StatusReport {
        tracing::info!(provider = %provider, "refreshing status");
        let report = resolve(self.fetcher.as_ref(), provider, self.sources_for(provider)).await;
        if !report.is_error() {
            self.cache.put(provider, report.clone()).await;
        }
        report
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use stratus::{Fetch, ProviderId, SourceConfig, SourceFormat, Stratus};

/// Transport double that serves a fixed body and counts outbound fetches.
struct CountingFetch {
    body: Option<String>,
    hits: AtomicUsize,
}

impl CountingFetch {
    fn some(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Some(body.to_string()),
            hits: AtomicUsize::new(0),
        })
    }

    fn none() -> Arc<Self> {
        Arc::new(Self {
            body: None,
            hits: AtomicUsize::new(0),
        })
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for CountingFetch {
    async fn fetch(&self, _url: &str) -> Option<String> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.body.clone()
    }
}

fn azure_only(fetch: Arc<CountingFetch>, window: Duration, format: SourceFormat) -> Stratus {
    Stratus::builder()
        .providers(&[ProviderId::Azure])
        .sources(
            ProviderId::Azure,
            vec![SourceConfig::new("https://example.invalid/status", format)],
        )
        .cache_duration(window)
        .with_fetcher(fetch)
        .build()
        .unwrap()
}

#[tokio::test]
async fn second_call_within_window_triggers_no_fetch() {
    let fetch = CountingFetch::some("all systems operational");
    let stratus = azure_only(fetch.clone(), Duration::from_secs(60), SourceFormat::Heuristic);

    let first = stratus.get_provider_status("azure").await;
    let second = stratus.get_provider_status("AZURE").await;

    assert_eq!(first, second, "cached report is returned unchanged");
    assert_eq!(fetch.hits(), 1);
}

#[tokio::test]
async fn stale_entry_triggers_exactly_one_refetch() {
    let fetch = CountingFetch::some("all systems operational");
    let stratus = azure_only(fetch.clone(), Duration::from_millis(50), SourceFormat::Heuristic);

    let _ = stratus.get_one(ProviderId::Azure).await;
    assert_eq!(fetch.hits(), 1);

    tokio::time::sleep(Duration::from_millis(60)).await;
    let _ = stratus.get_one(ProviderId::Azure).await;
    assert_eq!(fetch.hits(), 2);

    // Fresh again right after the refetch.
    let _ = stratus.get_one(ProviderId::Azure).await;
    assert_eq!(fetch.hits(), 2);
}

#[tokio::test]
async fn error_reports_are_never_cached() {
    // A body that is not a feed produces an error report on every resolve.
    let fetch = CountingFetch::some("definitely not a feed");
    let stratus = azure_only(fetch.clone(), Duration::from_secs(60), SourceFormat::Feed);

    assert!(stratus.get_one(ProviderId::Azure).await.is_error());
    assert!(stratus.get_one(ProviderId::Azure).await.is_error());

    // A failed verification must not suppress the retry for the rest of
    // the freshness window.
    assert_eq!(fetch.hits(), 2);
}

#[tokio::test]
async fn assumed_default_is_cached() {
    let fetch = CountingFetch::none();
    let stratus = azure_only(fetch.clone(), Duration::from_secs(60), SourceFormat::Heuristic);

    let report = stratus.get_one(ProviderId::Azure).await;
    assert!(report.note.is_some());
    assert_eq!(fetch.hits(), 1);

    // The optimistic default is a deliberate answer, so it is served from
    // cache like any verified report.
    let again = stratus.get_one(ProviderId::Azure).await;
    assert_eq!(again, report);
    assert_eq!(fetch.hits(), 1);
}

#[tokio::test]
async fn get_all_skips_providers_with_fresh_entries() {
    let fetch = CountingFetch::some("no issues reported");
    let stratus = azure_only(fetch.clone(), Duration::from_secs(60), SourceFormat::Heuristic);

    let _ = stratus.get_one(ProviderId::Azure).await;
    let all = stratus.get_all().await;

    assert_eq!(all.len(), 1);
    assert_eq!(fetch.hits(), 1, "fresh entry served without a new fetch");
}

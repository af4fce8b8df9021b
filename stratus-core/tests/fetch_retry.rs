use std::time::Duration;

use httpmock::prelude::*;
use stratus_core::fetch::{Fetch, HttpFetcher};
use stratus_types::RetryPolicy;

fn quick_retry(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_backoff: Duration::from_millis(10),
        timeout: Duration::from_secs(2),
    }
}

#[tokio::test]
async fn success_returns_body_without_retrying() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(200).body("all systems operational");
    });

    let fetcher = HttpFetcher::new(quick_retry(3), "stratus-test").unwrap();
    let body = fetcher.fetch(&server.url("/status")).await;

    assert_eq!(body.as_deref(), Some("all systems operational"));
    mock.assert_hits(1);
}

#[tokio::test]
async fn non_200_is_retried_up_to_max_attempts() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(503).body("unavailable");
    });

    let fetcher = HttpFetcher::new(quick_retry(3), "stratus-test").unwrap();
    let body = fetcher.fetch(&server.url("/status")).await;

    assert!(body.is_none(), "exhaustion is a normal absent result");
    mock.assert_hits(3);
}

#[tokio::test]
async fn connection_failure_collapses_to_none() {
    // Unroutable local port; every attempt fails at connect.
    let fetcher = HttpFetcher::new(quick_retry(2), "stratus-test").unwrap();
    let body = fetcher.fetch("http://127.0.0.1:9/status").await;
    assert!(body.is_none());
}

#[tokio::test]
async fn single_attempt_policy_never_retries() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/status");
        then.status(500);
    });

    let fetcher = HttpFetcher::new(quick_retry(1), "stratus-test").unwrap();
    assert!(fetcher.fetch(&server.url("/status")).await.is_none());
    mock.assert_hits(1);
}

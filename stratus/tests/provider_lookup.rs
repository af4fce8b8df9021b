use std::sync::Arc;

use async_trait::async_trait;
use stratus::{Fetch, OverallStatus, ProviderId, SourceConfig, SourceFormat, Stratus};

struct HealthyFetch;

#[async_trait]
impl Fetch for HealthyFetch {
    async fn fetch(&self, _url: &str) -> Option<String> {
        Some("all systems operational".to_string())
    }
}

fn stratus() -> Stratus {
    let mut builder = Stratus::builder().with_fetcher(Arc::new(HealthyFetch));
    for provider in ProviderId::ALL {
        builder = builder.sources(
            provider,
            vec![SourceConfig::new(
                format!("https://example.invalid/{provider}"),
                SourceFormat::Heuristic,
            )],
        );
    }
    builder.build().unwrap()
}

#[tokio::test]
async fn names_resolve_case_insensitively() {
    let stratus = stratus();
    for name in ["oci", "OCI", "Oci"] {
        let report = stratus.get_provider_status(name).await;
        assert_eq!(report.provider, "Oracle Cloud Infrastructure");
        assert_eq!(report.overall, OverallStatus::Operational);
    }
}

#[tokio::test]
async fn unknown_name_yields_error_report() {
    let stratus = stratus();
    let report = stratus.get_provider_status("digitalocean").await;

    assert!(report.is_error());
    assert_eq!(
        report.error.as_deref(),
        Some("unsupported provider: digitalocean")
    );
    assert_eq!(report.overall, OverallStatus::Unknown);
    assert!(report.services.is_empty());
}

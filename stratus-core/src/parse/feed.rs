use feed_rs::parser;

use stratus_types::{ProviderId, ServiceEntry, ServiceStatus, StatusError, StatusReport};

/// Parse an RSS/Atom incident feed into a per-entry report.
///
/// Each entry is classified from its description by literal substring:
/// "investigating" or "issue" (case-insensitive) marks it degraded. The
/// match is intentionally naive and matches inside larger words and phrases
/// ("no further issue" classifies as degraded); see DESIGN.md before
/// attempting to make it smarter. An empty feed means no active incidents.
#[must_use]
pub fn parse(provider: ProviderId, body: &str) -> StatusReport {
    let feed = match parser::parse(body.as_bytes()) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!(provider = %provider, error = %e, "feed body did not parse");
            return StatusReport::failed(
                provider,
                StatusError::parse("feed", e.to_string()).to_string(),
            );
        }
    };

    let mut services: Vec<ServiceEntry> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let name = entry
                .title
                .map_or_else(|| "Unknown".to_string(), |t| t.content);
            let description = entry.summary.map(|s| s.content);
            let status = match description.as_deref() {
                Some(text) => classify(text),
                None => ServiceStatus::Operational,
            };
            let mut service = ServiceEntry::new(name, status, "Global");
            if let Some(description) = description {
                service = service.with_description(description);
            }
            service
        })
        .collect();

    if services.is_empty() {
        services.push(ServiceEntry::new(
            "All Services",
            ServiceStatus::Operational,
            "Global",
        ));
    }

    StatusReport::from_services(provider, services)
}

fn classify(description: &str) -> ServiceStatus {
    let text = description.to_lowercase();
    if text.contains("investigating") || text.contains("issue") {
        ServiceStatus::Issue
    } else {
        ServiceStatus::Operational
    }
}

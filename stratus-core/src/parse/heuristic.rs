use stratus_types::{ProviderId, ServiceEntry, ServiceStatus, StatusReport};

// Status pages expose no stable DOM contract, so classification is keyword
// matching over the lower-cased body rather than markup traversal.
const ACTIVE_ISSUE_MARKERS: &[&str] = &[
    "investigating",
    "service degradation",
    "service disruption",
    "partial outage",
    "major outage",
    "service unavailable",
    "ongoing issue",
];

const OPERATIONAL_MARKERS: &[&str] = &[
    "all services are operating normally",
    "no issues reported",
    "all systems operational",
    "service is healthy",
    "operational",
];

/// Classify an HTML-shaped status page body.
///
/// `Issue` only when an active-issue marker is present and no operational
/// marker is; incident-history sections routinely mention past outages on
/// otherwise healthy pages, and the operational banner overrides them.
/// Produces exactly one provider-wide synthetic entry.
#[must_use]
pub fn parse(provider: ProviderId, body: &str) -> StatusReport {
    let content = body.to_lowercase();
    let has_active_issues = ACTIVE_ISSUE_MARKERS.iter().any(|m| content.contains(m));
    let looks_operational = OPERATIONAL_MARKERS.iter().any(|m| content.contains(m));

    let status = if has_active_issues && !looks_operational {
        ServiceStatus::Issue
    } else {
        ServiceStatus::Operational
    };

    StatusReport::from_services(
        provider,
        vec![ServiceEntry::new(
            format!("{} Services", provider.display_name()),
            status,
            "Global",
        )],
    )
}

use serde::Deserialize;

use stratus_types::{ProviderId, ServiceEntry, ServiceStatus, StatusError, StatusReport};

/// Incident document served by JSON status APIs.
#[derive(Debug, Deserialize)]
struct StatusDocument {
    #[serde(default)]
    incidents: Vec<Incident>,
}

#[derive(Debug, Deserialize)]
struct Incident {
    #[serde(alias = "title")]
    name: String,
    #[serde(default)]
    resolved: bool,
    #[serde(default)]
    affected_locations: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Parse a JSON incident document.
///
/// Incidents map directly: resolved ones read operational, open ones read
/// degraded, the first affected location becomes the region ("Global" when
/// the incident is unscoped). No incidents means no active problems.
#[must_use]
pub fn parse(provider: ProviderId, body: &str) -> StatusReport {
    let document: StatusDocument = match serde_json::from_str(body) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(provider = %provider, error = %e, "incident document did not parse");
            return StatusReport::failed(
                provider,
                StatusError::parse("structured", e.to_string()).to_string(),
            );
        }
    };

    let mut services: Vec<ServiceEntry> = document
        .incidents
        .into_iter()
        .map(|incident| {
            let status = if incident.resolved {
                ServiceStatus::Operational
            } else {
                ServiceStatus::Issue
            };
            let region = incident
                .affected_locations
                .into_iter()
                .next()
                .unwrap_or_else(|| "Global".to_string());
            let mut service = ServiceEntry::new(incident.name, status, region);
            if let Some(description) = incident.description {
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

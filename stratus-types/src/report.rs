//! Normalized status report envelopes produced by the resolver pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::provider::ProviderId;

/// Health classification of a single service entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    /// Operating normally.
    Operational,
    /// An active, provider-confirmed problem.
    Issue,
    /// The provider is actively investigating.
    Investigating,
    /// State could not be determined.
    Unknown,
}

/// Provider-level health derived from the service list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallStatus {
    /// Every known service is operational.
    Operational,
    /// At least one service is degraded.
    IssuesDetected,
    /// Nothing could be verified (error reports only).
    Unknown,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Operational => "Operational",
            Self::IssuesDetected => "Issues Detected",
            Self::Unknown => "Unknown",
        })
    }
}

/// One named sub-component's status within a provider report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Service or incident name as reported by the provider.
    pub name: String,
    /// Normalized health classification.
    pub status: ServiceStatus,
    /// Affected region, "Global" when the source does not scope it.
    pub region: String,
    /// Raw provider-supplied detail text, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServiceEntry {
    /// Build an entry without detail text.
    pub fn new(name: impl Into<String>, status: ServiceStatus, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            region: region.into(),
            description: None,
        }
    }

    /// Attach provider-supplied detail text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Normalized per-provider health summary.
///
/// `overall` is always derived from `services` at construction; it is never
/// accepted independently, so a report can not carry a summary that
/// contradicts its own entries. Callers distinguish three outcomes:
/// `error.is_some()` (verification failed), `overall == IssuesDetected`
/// (verified degradation), and a healthy report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Human-friendly provider name.
    pub provider: String,
    /// Provider-level health derived from `services`.
    pub overall: OverallStatus,
    /// Ordered service entries backing `overall`.
    pub services: Vec<ServiceEntry>,
    /// Wall-clock instant the report was produced.
    pub last_updated: DateTime<Utc>,
    /// Set on optimistic defaults: the result is assumed, not verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Set when verification failed outright; `None` on every verified or
    /// assumed report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusReport {
    /// Build a verified report, deriving `overall` from the entries.
    #[must_use]
    pub fn from_services(provider: ProviderId, services: Vec<ServiceEntry>) -> Self {
        Self {
            provider: provider.display_name().to_string(),
            overall: derive_overall(&services),
            services,
            last_updated: Utc::now(),
            note: None,
            error: None,
        }
    }

    /// The canonical optimistic default: assumed healthy, flagged unverified.
    ///
    /// Used when every candidate source for a provider is exhausted. This is
    /// a deliberate best-effort answer and is cacheable, unlike an error
    /// report: a monitor that can not reach a third-party status page must
    /// not report that as a provider outage.
    #[must_use]
    pub fn unverified(provider: ProviderId) -> Self {
        let mut report = Self::from_services(
            provider,
            vec![ServiceEntry::new(
                format!("{} Services", provider.display_name()),
                ServiceStatus::Operational,
                "Global",
            )],
        );
        report.note = Some("assumed status - could not verify".to_string());
        report
    }

    /// Build an error report for a provider whose verification failed.
    #[must_use]
    pub fn failed(provider: ProviderId, message: impl Into<String>) -> Self {
        Self {
            provider: provider.display_name().to_string(),
            overall: OverallStatus::Unknown,
            services: Vec::new(),
            last_updated: Utc::now(),
            note: None,
            error: Some(message.into()),
        }
    }

    /// Build an error report for a provider name outside the roster.
    #[must_use]
    pub fn unsupported(name: &str) -> Self {
        Self {
            provider: name.to_string(),
            overall: OverallStatus::Unknown,
            services: Vec::new(),
            last_updated: Utc::now(),
            note: None,
            error: Some(format!("unsupported provider: {name}")),
        }
    }

    /// True when verification failed and the payload carries no health data.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// All-Operational rule: a non-empty list where every entry is operational is
/// `Operational`, any other non-empty list is `IssuesDetected`. An empty list
/// carries no evidence either way and stays `Unknown`.
fn derive_overall(services: &[ServiceEntry]) -> OverallStatus {
    if services.is_empty() {
        return OverallStatus::Unknown;
    }
    if services
        .iter()
        .all(|s| s.status == ServiceStatus::Operational)
    {
        OverallStatus::Operational
    } else {
        OverallStatus::IssuesDetected
    }
}

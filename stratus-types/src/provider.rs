//! Provider identity types shared across crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

/// Closed enumeration of the cloud providers Stratus knows how to monitor.
///
/// Every provider carries a construction-time mapping to its candidate status
/// sources and display name, so adding a variant forces the compiler to walk
/// every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Microsoft Azure.
    Azure,
    /// Google Cloud Platform.
    Gcp,
    /// Amazon Web Services.
    Aws,
    /// Oracle Cloud Infrastructure.
    Oci,
}

impl ProviderId {
    /// The full roster, in the order reports are presented.
    pub const ALL: [Self; 4] = [Self::Azure, Self::Gcp, Self::Aws, Self::Oci];

    /// Stable lowercase identifier used for lookups and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Gcp => "gcp",
            Self::Aws => "aws",
            Self::Oci => "oci",
        }
    }

    /// Human-friendly vendor string used in rendered reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Azure => "Azure",
            Self::Gcp => "Google Cloud Platform",
            Self::Aws => "AWS",
            Self::Oci => "Oracle Cloud Infrastructure",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = StatusError;

    /// Case-insensitive lookup; unknown names yield `UnsupportedProvider`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatusError::unsupported_provider(s))
    }
}

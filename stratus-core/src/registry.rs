use stratus_types::{ProviderId, SourceConfig, SourceFormat};

struct Source {
    url: &'static str,
    format: SourceFormat,
}

/// Candidate sources per provider, in priority order.
///
/// The urls are third-party, unversioned surfaces that may change shape
/// without notice; that is why each provider lists fallbacks and why the
/// resolver degrades to an optimistic default once the list is exhausted.
const fn sources(provider: ProviderId) -> &'static [Source] {
    match provider {
        ProviderId::Azure => &[
            Source {
                url: "https://status.azure.com/en-us/status/",
                format: SourceFormat::Heuristic,
            },
            Source {
                url: "https://azure.microsoft.com/en-us/status/",
                format: SourceFormat::Heuristic,
            },
        ],
        ProviderId::Gcp => &[
            Source {
                url: "https://status.cloud.google.com/",
                format: SourceFormat::Heuristic,
            },
            Source {
                url: "https://cloud.google.com/status",
                format: SourceFormat::Heuristic,
            },
        ],
        ProviderId::Aws => &[Source {
            url: "https://status.aws.amazon.com/rss/all.rss",
            format: SourceFormat::Feed,
        }],
        ProviderId::Oci => &[
            Source {
                url: "https://ocistatus.oraclecloud.com/api/v2/status.json",
                format: SourceFormat::Structured,
            },
            Source {
                url: "https://ocistatus.oraclecloud.com/",
                format: SourceFormat::Heuristic,
            },
        ],
    }
}

/// The built-in source list for `provider`, in priority order.
#[must_use]
pub fn default_sources(provider: ProviderId) -> Vec<SourceConfig> {
    sources(provider)
        .iter()
        .map(|s| SourceConfig::new(s.url, s.format))
        .collect()
}

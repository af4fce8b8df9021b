use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stratus workspace.
///
/// Transport and parse failures are contained inside the resolver pipeline
/// and surface to callers only as fields on a [`crate::StatusReport`]; the
/// sole variant returned as a hard `Err` is `InvalidConfig`, at build time.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StatusError {
    /// HTTP-level failure (timeout, connect error, non-200) after retries.
    #[error("transport failure for {url}: {msg}")]
    Transport {
        /// Endpoint that failed.
        url: String,
        /// Human-readable failure description.
        msg: String,
    },

    /// A fetched body could not be interpreted in its expected format.
    #[error("{format} parse failure: {msg}")]
    Parse {
        /// Format family label ("heuristic", "feed", "structured").
        format: String,
        /// Human-readable failure description.
        msg: String,
    },

    /// The requested provider name is not part of the closed roster.
    #[error("unsupported provider: {name}")]
    UnsupportedProvider {
        /// The name as supplied by the caller.
        name: String,
    },

    /// A scheduled per-provider task failed outside the resolver's own
    /// containment (defensive catch-all; isolated to that provider's slot).
    #[error("{provider} task failed: {msg}")]
    ProviderTask {
        /// Provider whose task failed.
        provider: String,
        /// Human-readable failure description.
        msg: String,
    },

    /// Builder-time configuration validation failure.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StatusError {
    /// Helper: build a `Transport` error for a url and message.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Parse` error for a format label and message.
    pub fn parse(format: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Parse {
            format: format.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `UnsupportedProvider` error from the caller's input.
    pub fn unsupported_provider(name: impl Into<String>) -> Self {
        Self::UnsupportedProvider { name: name.into() }
    }

    /// Helper: build a `ProviderTask` error with the provider name and message.
    pub fn provider_task(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::ProviderTask {
            provider: provider.into(),
            msg: msg.into(),
        }
    }
}

//! Total parsers from raw response bodies to normalized reports.
//!
//! One parser per format family. All of them are total: malformed input
//! becomes an error report (`error` set), never a propagated failure, so a
//! garbled third-party page can not take down a resolve cycle.

mod feed;
mod heuristic;
mod structured;

use stratus_types::{ProviderId, SourceFormat, StatusReport};

/// Parse `body` with the parser family designated for its source.
#[must_use]
pub fn parse(provider: ProviderId, format: SourceFormat, body: &str) -> StatusReport {
    match format {
        SourceFormat::Heuristic => heuristic::parse(provider, body),
        SourceFormat::Feed => feed::parse(provider, body),
        SourceFormat::Structured => structured::parse(provider, body),
    }
}

use stratus_types::{ProviderId, SourceConfig, StatusReport};

use crate::fetch::Fetch;
use crate::parse;

/// Resolve one provider's status through its candidate sources; never fails.
///
/// Sources are tried in priority order and the first non-empty body wins;
/// its designated parser produces the report. A parse failure on the winning
/// source ends the attempt without trying lower-priority candidates: the
/// retrieval succeeded, so the remaining urls would not fix an
/// interpretation problem, they would just mask it. Only when every source
/// yields no body does the resolver degrade to the optimistic default: the
/// pages are third-party and unversioned, and a monitor whose scrape fails
/// must answer "assumed healthy, unverified" rather than invent an outage.
pub async fn resolve<F>(fetcher: &F, provider: ProviderId, sources: &[SourceConfig]) -> StatusReport
where
    F: Fetch + ?Sized,
{
    for source in sources {
        if let Some(body) = fetcher.fetch(&source.url).await
            && !body.is_empty()
        {
            tracing::debug!(provider = %provider, url = %source.url, "source yielded a body");
            return parse::parse(provider, source.format, &body);
        }
    }

    tracing::info!(provider = %provider, "all sources exhausted, assuming operational");
    StatusReport::unverified(provider)
}

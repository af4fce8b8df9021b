use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use stratus_types::{RetryPolicy, StatusError};

/// Transport seam between the resolver and the network.
///
/// The resolver only needs "give me the body at this url, or nothing"; the
/// trait keeps that boundary narrow so tests can substitute canned or
/// misbehaving transports without a socket.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `url`, returning the body on success and `None` once every
    /// attempt is exhausted. Exhaustion is a normal outcome, not an error;
    /// the caller decides the fallback.
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Production transport: one pooled `reqwest::Client` shared by every call,
/// linear-backoff retry per [`RetryPolicy`].
///
/// The client is internally synchronized and reference-counted, so
/// concurrent fetches from sibling tasks need no external locking; dropping
/// the owning orchestrator releases the pool.
pub struct HttpFetcher {
    client: Client,
    retry: RetryPolicy,
}

impl HttpFetcher {
    /// Build the pooled client with the configured timeout and User-Agent.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the underlying client cannot be
    /// constructed (e.g. a User-Agent that is not a valid header value).
    pub fn new(retry: RetryPolicy, user_agent: &str) -> Result<Self, StatusError> {
        let client = Client::builder()
            .timeout(retry.timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| StatusError::InvalidConfig(e.to_string()))?;
        Ok(Self { client, retry })
    }

    /// One attempt: timeouts, connect failures, body-read failures, and
    /// non-200 responses all classify as transport errors.
    async fn attempt(&self, url: &str) -> Result<String, StatusError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| StatusError::transport(url, e.to_string()))?;
        if response.status() != StatusCode::OK {
            return Err(StatusError::transport(
                url,
                format!("HTTP {}", response.status()),
            ));
        }
        response
            .text()
            .await
            .map_err(|e| StatusError::transport(url, e.to_string()))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        for attempt in 1..=self.retry.max_attempts {
            match self.attempt(url).await {
                Ok(body) => return Some(body),
                Err(e) => tracing::warn!(attempt, error = %e, "fetch attempt failed"),
            }
            // Linear backoff between attempts, never after the last. The
            // sleep is a suspension point, so sibling fetches keep running
            // and a cancelled batch stops here.
            if attempt < self.retry.max_attempts {
                tokio::time::sleep(self.retry.base_backoff * attempt).await;
            }
        }
        None
    }
}

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::{
    config::{endpoints, ApiConfig},
    model::{AboutContent, Episode, FaqContent},
    retry::RetryDecision,
    transport::{RequestSpec, Transport},
    PodsiteError, Result,
};

/// Deadline for the liveness probe. Deliberately shorter than the content
/// request timeout, and not retried.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Retrying HTTP client for the podsite backend content API.
///
/// Each call runs a sequential retry loop of its own; concurrent calls are
/// fully independent. Transient failures (network, timeout, 5xx, undecodable
/// bodies) are retried on the configured backoff schedule, client errors
/// (4xx) are surfaced immediately.
#[derive(Clone, Debug)]
pub struct PodsiteClient {
    transport: Transport,
}

impl PodsiteClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a client honoring the `PODSITE_API_BASE_URL` override.
    pub fn from_env() -> Self {
        Self::with_config(ApiConfig::from_env())
    }

    /// Creates a client with explicit configuration.
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        self.transport.config()
    }

    /// Fetches `path` and decodes the response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.get_json(path).await?;
        serde_json::from_value(value).map_err(|err| {
            PodsiteError::Decode(format!("response shape mismatch for {path}: {err}"))
        })
    }

    /// Fetches `path`, retrying transient failures per the configured
    /// policy.
    ///
    /// The attempt counter starts at 1. After the budget is exhausted the
    /// *last* observed failure is surfaced, not an aggregate.
    pub async fn get_json(&self, path: &str) -> Result<JsonValue> {
        let spec = RequestSpec::get(path);
        let policy = self.config().retry;
        let mut attempt = 1u32;
        loop {
            match self.transport.send(&spec).await {
                Ok(value) => return Ok(value),
                Err(err) => match policy.decide(attempt, &err) {
                    RetryDecision::GiveUp => return Err(err),
                    RetryDecision::RetryAfter(delay) => {
                        tracing::warn!(
                            path,
                            attempt,
                            max_attempts = policy.max_attempts,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "request failed, backing off before retry"
                        );
                        sleep(delay).await;
                        attempt += 1;
                    }
                },
            }
        }
    }

    /// Fetches the featured episode.
    pub async fn featured_episode(&self) -> Result<Episode> {
        self.get(endpoints::FEATURED_EPISODE).await
    }

    /// Fetches all episodes, in backend order (newest first).
    pub async fn episodes(&self) -> Result<Vec<Episode>> {
        self.get(endpoints::EPISODES).await
    }

    /// Fetches a single episode by id.
    pub async fn episode(&self, id: &str) -> Result<Episode> {
        self.get(&endpoints::episode_by_id(id)).await
    }

    /// Fetches the about page content.
    pub async fn about(&self) -> Result<AboutContent> {
        self.get(endpoints::ABOUT).await
    }

    /// Fetches the FAQ items.
    pub async fn faq(&self) -> Result<FaqContent> {
        self.get(endpoints::FAQ).await
    }

    /// Liveness probe: single attempt, fixed 5 second deadline, true iff a
    /// 2xx response arrives. Never fails.
    pub async fn health(&self) -> bool {
        let spec = RequestSpec::get(endpoints::HEALTH);
        match self.transport.execute(&spec, HEALTH_TIMEOUT).await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                tracing::debug!(error = %err, "health probe failed");
                false
            }
        }
    }
}

impl Default for PodsiteClient {
    fn default() -> Self {
        Self::new()
    }
}

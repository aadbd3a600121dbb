use crate::error::SourceError;
use crate::sources::SourceConfig;
use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout and bounded retry schedule for the source APIs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub timeout: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &SourceConfig) -> Self {
        RetryPolicy {
            max_retries: config.max_retries,
            base_delay: Duration::from_millis(config.retry_delay_ms),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Backoff before retry number `attempt + 1`: `base * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    pub fn is_retryable(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }
}

/// JSON-over-HTTP GET with the retry policy applied.
pub struct HttpSource {
    client: reqwest::Client,
    policy: RetryPolicy,
}

impl HttpSource {
    pub fn new(policy: RetryPolicy) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(policy.timeout).build()?;

        Ok(HttpSource { client, policy })
    }

    /// Transport failures, 5xx and 429 are retried; other statuses and
    /// undecodable bodies fail immediately.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let attempts = self.policy.attempts();
        let mut last = String::new();

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = self.policy.delay_for(attempt - 1);
                debug!("retrying {} in {} ms", url, delay.as_millis());
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url).query(query).send().await {
                Ok(response) if response.status().is_success() => {
                    let body = response.text().await?;
                    return Ok(serde_json::from_str(&body)?);
                }
                Ok(response) if RetryPolicy::is_retryable(response.status()) => {
                    last = format!("status {}", response.status().as_u16());
                }
                Ok(response) => {
                    return Err(SourceError::Status {
                        url: url.to_string(),
                        status: response.status().as_u16(),
                    });
                }
                Err(e) => last = e.to_string(),
            }

            warn!("attempt {} of {} for {} failed: {}", attempt + 1, attempts, url, last);
        }

        Err(SourceError::RetriesExhausted {
            url: url.to_string(),
            attempts,
            last,
        })
    }
}

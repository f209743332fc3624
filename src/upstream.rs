//! HTTP plumbing shared by the remote catalog and cart backends.
//!
//! The commerce API speaks JSON. A 404 is an answer ("no such resource"),
//! anything else outside 2xx is an error.

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

use crate::config::{ConfigError, RetryConfig, TimeoutConfig};
use crate::error::{Result, StorefrontError};
use crate::resilience::{calculate_backoff, is_retryable};

/// Client for one commerce API root.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeouts: &TimeoutConfig) -> std::result::Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| ConfigError::Url(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::Url(base_url.to_string()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.upstream_connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_request_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a JSON resource, retrying transient failures under `policy`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        policy: &RetryConfig,
    ) -> Result<Option<T>> {
        let max_attempts = if policy.enabled { policy.max_attempts.max(1) } else { 1 };
        let mut attempts = 0;

        loop {
            attempts += 1;
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if attempts < max_attempts && is_retryable(Some(status), false) {
                        let delay = calculate_backoff(attempts, policy);
                        tracing::info!(url = %url, attempt = attempts, delay = ?delay, status = %status, "Retrying upstream read");
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return decode(&url, response).await;
                }
                Err(e) => {
                    if attempts < max_attempts && is_retryable(None, true) {
                        let delay = calculate_backoff(attempts, policy);
                        tracing::info!(url = %url, attempt = attempts, delay = ?delay, error = %e, "Retrying after network error");
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// POST a JSON body once and decode the JSON answer.
    pub async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(url.clone()).json(body).send().await?;
        decode(&url, response).await
    }
}

async fn decode<T: DeserializeOwned>(url: &Url, response: reqwest::Response) -> Result<Option<T>> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(StorefrontError::UpstreamStatus {
            endpoint: url.to_string(),
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

use crate::error::HealthError;
use reqwest::Client;
use url::Url;

/// Where a health evaluation gets its metrics document from.
#[async_trait::async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self) -> Result<String, HealthError>;
}

pub struct HttpMetricsSource {
    client: Client,
    endpoint: Url,
}

impl HttpMetricsSource {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait::async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn fetch(&self) -> Result<String, HealthError> {
        ::log::debug!("Fetching metrics from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(HealthError::Fetch)?;

        // The body is evaluated regardless of status.
        if !response.status().is_success() {
            ::log::warn!(
                "Metrics endpoint {} returned {}",
                self.endpoint,
                response.status()
            );
        }

        response.text().await.map_err(HealthError::Read)
    }
}

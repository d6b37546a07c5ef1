//! OpenWeatherMap HTTP adapter

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::SkycastError;
use crate::config::ProviderConfig;
use crate::models::WeatherQuery;

use super::{ProviderPayload, WeatherProvider};

/// Adapter for the OpenWeatherMap current-weather endpoint.
///
/// Holds the immutable provider configuration (API key, base URL, timeout)
/// handed to it at construction; no ambient environment lookups at request
/// time.
#[derive(Debug, Clone)]
pub struct OpenWeatherMapProvider {
    config: ProviderConfig,
    http: Client,
}

impl OpenWeatherMapProvider {
    /// Create a new provider adapter with the given configuration.
    ///
    /// The request timeout is baked into the HTTP client once here.
    pub fn new(config: ProviderConfig) -> crate::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| SkycastError::upstream(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapProvider {
    #[instrument(skip(self), fields(location = %query.location, units = %query.units))]
    async fn current_weather(&self, query: &WeatherQuery) -> crate::Result<ProviderPayload> {
        let url = format!("{}/weather", self.config.base_url);

        debug!("Requesting current weather from provider");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query.location.as_str()),
                ("appid", self.config.api_key.as_str()),
                ("units", query.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SkycastError::upstream(format!(
                        "Provider request timed out after {}s",
                        self.config.timeout_seconds
                    ))
                } else {
                    SkycastError::upstream(format!("Provider request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SkycastError::upstream(format!("Failed to read provider response: {e}")))?;

        if !status.is_success() {
            return Err(SkycastError::upstream(format!(
                "Provider returned status {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| SkycastError::upstream(format!("Failed to parse provider JSON: {e}")))
    }
}

/// Keep provider error bodies short enough for a log line
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}

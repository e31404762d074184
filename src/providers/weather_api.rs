//! Weather API client for WeatherAPI.com integration
//!
//! Fetches current conditions from the `current.json` endpoint and
//! normalizes them into a [`WeatherPayload`].

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::{WeatherProvider, build_http_client, read_json, request_error, require_api_key};
use crate::config::WeatherConfig;
use crate::error::ProviderDomain;
use crate::models::WeatherPayload;
use crate::{Result, TravelPlannerError};

/// Weather API client for WeatherAPI.com
pub struct WeatherApiClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: WeatherConfig) -> anyhow::Result<Self> {
        let client = build_http_client(config.timeout())?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    #[instrument(skip(self))]
    async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload> {
        let api_key = require_api_key(self.config.api_key.as_deref(), "WEATHER_API_KEY")?;
        let start_time = Instant::now();
        let url = format!("{}/current.json", self.config.base_url.trim_end_matches('/'));

        info!("Getting current weather for '{}'", city);

        let response = self
            .client
            .get(&url)
            .query(&[("key", api_key), ("q", city)])
            .send()
            .await
            .map_err(|e| request_error(ProviderDomain::Weather, &e, |detail| detail))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<weatherapi::ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            warn!("Weather API returned {} for '{}': {}", status, city, detail);
            return Err(TravelPlannerError::provider(
                ProviderDomain::Weather,
                format!("HTTP {}: {}", status.as_u16(), detail),
            ));
        }

        let current: weatherapi::CurrentResponse =
            read_json(response, ProviderDomain::Weather, |detail| detail).await?;

        info!(
            "Retrieved current weather for '{}' in {:.3}s",
            city,
            start_time.elapsed().as_secs_f64()
        );

        Ok(current.into())
    }
}

/// WeatherAPI.com response structures
mod weatherapi {
    use super::WeatherPayload;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub location: Option<LocationData>,
        pub current: Option<CurrentData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct LocationData {
        pub name: String,
        pub country: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentData {
        pub temp_f: Option<f64>,
        pub humidity: Option<f64>,
        pub wind_mph: Option<f64>,
        pub condition: Option<ConditionData>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionData {
        pub text: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorResponse {
        pub error: ErrorBody,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorBody {
        pub message: String,
    }

    impl From<CurrentResponse> for WeatherPayload {
        fn from(response: CurrentResponse) -> Self {
            let location = response
                .location
                .map(|l| match l.country.filter(|c| !c.is_empty()) {
                    Some(country) => format!("{}, {}", l.name, country),
                    None => l.name,
                })
                .unwrap_or_default();

            let current = response.current;
            WeatherPayload {
                location,
                temperature_f: current.as_ref().and_then(|c| c.temp_f),
                condition_text: current
                    .as_ref()
                    .and_then(|c| c.condition.as_ref())
                    .and_then(|c| c.text.clone()),
                humidity: current.as_ref().and_then(|c| c.humidity),
                wind_mph: current.as_ref().and_then(|c| c.wind_mph),
            }
        }
    }
}

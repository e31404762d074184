//! External data providers
//!
//! Each provider fetches one kind of data for a city and returns a
//! normalized payload, or a domain-tagged [`TravelPlannerError`] on failure.
//! Clients are configured explicitly at construction; a missing API key is
//! reported when the client is called.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ProviderDomain;
use crate::models::{FlightPayload, SafetyPayload, WeatherPayload};
use crate::{Result, TravelPlannerError};

pub mod airports;
pub mod aviationstack;
pub mod news_api;
pub mod weather_api;

pub use aviationstack::AviationstackClient;
pub use news_api::NewsApiClient;
pub use weather_api::WeatherApiClient;

const USER_AGENT: &str = concat!("TravelPlanner/", env!("CARGO_PKG_VERSION"));

/// Source of current weather conditions
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherPayload>;
}

/// Source of recent crime news
#[async_trait]
pub trait SafetyProvider: Send + Sync {
    async fn fetch_safety(&self, city: &str) -> Result<SafetyPayload>;
}

/// Source of arriving flights
#[async_trait]
pub trait FlightProvider: Send + Sync {
    async fn fetch_flights(&self, city: &str) -> Result<FlightPayload>;
}

/// Build the HTTP client shared by a provider
pub(crate) fn build_http_client(timeout: Duration) -> anyhow::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .with_context(|| "Failed to create HTTP client")
}

/// Return the configured key or a configuration error naming `variable`
pub(crate) fn require_api_key<'a>(key: Option<&'a str>, variable: &str) -> Result<&'a str> {
    key.map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| TravelPlannerError::config(format!("{variable} is not configured")))
}

/// Read a JSON body, mapping transport and decode failures to provider errors
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    domain: ProviderDomain,
    describe: impl Fn(String) -> String,
) -> Result<T> {
    let body = response.text().await.map_err(|e| {
        error!("Failed to read {} response body: {}", domain, e);
        TravelPlannerError::provider(domain, describe(format!("failed to read response: {e}")))
    })?;

    debug!("{} response: {} bytes", domain, body.len());

    serde_json::from_str(&body).map_err(|e| {
        error!("Failed to parse {} response: {}", domain, e);
        TravelPlannerError::provider(domain, describe(format!("invalid response: {e}")))
    })
}

/// Map a reqwest send error to a provider error
pub(crate) fn request_error(
    domain: ProviderDomain,
    err: &reqwest::Error,
    describe: impl Fn(String) -> String,
) -> TravelPlannerError {
    let detail = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("request failed: {err}")
    };
    TravelPlannerError::provider(domain, describe(detail))
}

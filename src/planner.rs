//! Travel recommendation orchestration
//!
//! Fans out to the weather, safety and flight providers concurrently, scores
//! each payload and aggregates the three records. Aggregation only happens
//! when every provider succeeded.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join3;
use tracing::{info, instrument, warn};

use crate::config::TravelPlannerConfig;
use crate::error::ProviderDomain;
use crate::models::{CompositeResult, FlightRecord, SafetyRecord, WeatherRecord};
use crate::providers::{
    AviationstackClient, FlightProvider, NewsApiClient, SafetyProvider, WeatherApiClient,
    WeatherProvider,
};
use crate::scoring::{aggregate, score_flights, score_safety, score_weather};
use crate::{Result, TravelPlannerError};

/// Upper bound on each provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderTimeouts {
    pub weather: Duration,
    pub safety: Duration,
    pub flights: Duration,
}

impl Default for ProviderTimeouts {
    fn default() -> Self {
        let limit = Duration::from_secs(10);
        Self {
            weather: limit,
            safety: limit,
            flights: limit,
        }
    }
}

impl From<&TravelPlannerConfig> for ProviderTimeouts {
    fn from(config: &TravelPlannerConfig) -> Self {
        Self {
            weather: config.weather.timeout(),
            safety: config.news.timeout(),
            flights: config.flights.timeout(),
        }
    }
}

/// Produces destination recommendations from three independent providers
pub struct TravelPlanner {
    weather: Arc<dyn WeatherProvider>,
    safety: Arc<dyn SafetyProvider>,
    flights: Arc<dyn FlightProvider>,
    timeouts: ProviderTimeouts,
}

impl TravelPlanner {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        safety: Arc<dyn SafetyProvider>,
        flights: Arc<dyn FlightProvider>,
        timeouts: ProviderTimeouts,
    ) -> Self {
        Self {
            weather,
            safety,
            flights,
            timeouts,
        }
    }

    /// Build a planner backed by the HTTP clients described in `config`
    pub fn from_config(config: &TravelPlannerConfig) -> anyhow::Result<Self> {
        let weather = WeatherApiClient::new(config.weather.clone())?;
        let safety = NewsApiClient::new(config.news.clone())?;
        let flights = AviationstackClient::new(config.flights.clone())?;

        Ok(Self::new(
            Arc::new(weather),
            Arc::new(safety),
            Arc::new(flights),
            ProviderTimeouts::from(config),
        ))
    }

    /// Current weather for `city`, scored
    #[instrument(skip(self))]
    pub async fn weather(&self, city: &str) -> Result<WeatherRecord> {
        let city = validate_city(city)?;
        let payload = timed(
            ProviderDomain::Weather,
            self.timeouts.weather,
            self.weather.fetch_weather(city),
        )
        .await?;
        Ok(score_weather(payload))
    }

    /// Crime news assessment for `city`
    #[instrument(skip(self))]
    pub async fn safety(&self, city: &str) -> Result<SafetyRecord> {
        let city = validate_city(city)?;
        let payload = timed(
            ProviderDomain::Safety,
            self.timeouts.safety,
            self.safety.fetch_safety(city),
        )
        .await?;
        Ok(score_safety(city, payload))
    }

    /// Arriving flights for `city`, scored
    #[instrument(skip(self))]
    pub async fn flights(&self, city: &str) -> Result<FlightRecord> {
        let city = validate_city(city)?;
        let payload = timed(
            ProviderDomain::Flights,
            self.timeouts.flights,
            self.flights.fetch_flights(city),
        )
        .await?;
        Ok(score_flights(payload))
    }

    /// Composite recommendation for `city`.
    ///
    /// All three providers are queried concurrently. If any of them fails the
    /// result is [`TravelPlannerError::Incomplete`] carrying every failure,
    /// and no partial score is produced.
    #[instrument(skip(self))]
    pub async fn recommend(&self, city: &str) -> Result<CompositeResult> {
        let city = validate_city(city)?;
        let start_time = Instant::now();

        let (weather, safety, flights) = join3(
            timed(
                ProviderDomain::Weather,
                self.timeouts.weather,
                self.weather.fetch_weather(city),
            ),
            timed(
                ProviderDomain::Safety,
                self.timeouts.safety,
                self.safety.fetch_safety(city),
            ),
            timed(
                ProviderDomain::Flights,
                self.timeouts.flights,
                self.flights.fetch_flights(city),
            ),
        )
        .await;

        info!(
            "Provider calls for '{}' finished in {:.3}s",
            city,
            start_time.elapsed().as_secs_f64()
        );

        match (weather, safety, flights) {
            (Ok(weather), Ok(safety), Ok(flights)) => Ok(aggregate(
                score_weather(weather),
                score_safety(city, safety),
                score_flights(flights),
                city,
            )),
            (weather, safety, flights) => {
                let failures: Vec<String> = [
                    weather.err().map(|e| describe_failure(ProviderDomain::Weather, &e)),
                    safety.err().map(|e| describe_failure(ProviderDomain::Safety, &e)),
                    flights.err().map(|e| describe_failure(ProviderDomain::Flights, &e)),
                ]
                .into_iter()
                .flatten()
                .collect();

                warn!(
                    "Recommendation for '{}' aborted: {}",
                    city,
                    failures.join("; ")
                );
                Err(TravelPlannerError::Incomplete { failures })
            }
        }
    }
}

fn validate_city(city: &str) -> Result<&str> {
    let city = city.trim();
    if city.is_empty() {
        return Err(TravelPlannerError::validation("city must not be empty"));
    }
    Ok(city)
}

/// Run a provider call, turning an elapsed deadline into a provider failure
async fn timed<T, F>(domain: ProviderDomain, limit: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            warn!("{} provider timed out after {:?}", domain, limit);
            Err(TravelPlannerError::provider(
                domain,
                format!("request timed out after {}s", limit.as_secs_f64()),
            ))
        }
    }
}

/// Failure line tagged with its domain exactly once
fn describe_failure(domain: ProviderDomain, err: &TravelPlannerError) -> String {
    match err {
        TravelPlannerError::Provider { .. } => err.to_string(),
        other => format!("{domain}: {other}"),
    }
}

//! Aviationstack client for flight availability
//!
//! Resolves the destination to an airport code and lists arriving flights.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::airports::airport_code_for;
use super::{FlightProvider, build_http_client, read_json, request_error, require_api_key};
use crate::config::FlightsConfig;
use crate::error::ProviderDomain;
use crate::models::{FlightLeg, FlightPayload};
use crate::{Result, TravelPlannerError};

/// Aviationstack API client
pub struct AviationstackClient {
    client: Client,
    config: FlightsConfig,
}

impl AviationstackClient {
    pub fn new(config: FlightsConfig) -> anyhow::Result<Self> {
        let client = build_http_client(config.timeout())?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl FlightProvider for AviationstackClient {
    #[instrument(skip(self))]
    async fn fetch_flights(&self, city: &str) -> Result<FlightPayload> {
        let api_key = require_api_key(self.config.api_key.as_deref(), "AVIATIONSTACK_API_KEY")?;
        let airport_code = airport_code_for(city).ok_or_else(|| {
            TravelPlannerError::provider(
                ProviderDomain::Flights,
                format!("no airport code found for {}", city.trim()),
            )
        })?;

        let start_time = Instant::now();
        let url = format!("{}/flights", self.config.base_url.trim_end_matches('/'));
        let limit = self.config.max_results.to_string();

        info!("Searching flights arriving at {} for '{}'", airport_code, city);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("access_key", api_key),
                ("arr_iata", airport_code.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| request_error(ProviderDomain::Flights, &e, |detail| detail))?;

        let status = response.status();
        let flights: aviationstack::FlightsResponse =
            read_json(response, ProviderDomain::Flights, |detail| {
                format!("HTTP {}: {detail}", status.as_u16())
            })
            .await?;

        // errors may arrive with a 200 status
        if let Some(error) = flights.error {
            warn!("Aviationstack returned an error for {}: {}", airport_code, error.message);
            return Err(TravelPlannerError::provider(
                ProviderDomain::Flights,
                format!("{} ({})", error.message, error.code),
            ));
        }
        if !status.is_success() {
            return Err(TravelPlannerError::provider(
                ProviderDomain::Flights,
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            ));
        }

        let flights: Vec<FlightLeg> = flights
            .data
            .unwrap_or_default()
            .into_iter()
            .map(FlightLeg::from)
            .collect();

        info!(
            "Found {} flights arriving at {} in {:.3}s",
            flights.len(),
            airport_code,
            start_time.elapsed().as_secs_f64()
        );

        Ok(FlightPayload {
            airport_code,
            flights,
        })
    }
}

fn parse_time(value: Option<String>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
        .map(|t| t.with_timezone(&Utc))
}

/// Aviationstack response structures
mod aviationstack {
    use super::{FlightLeg, parse_time};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct FlightsResponse {
        pub data: Option<Vec<FlightData>>,
        pub error: Option<ErrorBody>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ErrorBody {
        #[serde(default)]
        pub code: String,
        #[serde(default)]
        pub message: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct FlightData {
        pub flight_status: Option<String>,
        pub departure: Option<Endpoint>,
        pub arrival: Option<Endpoint>,
        pub airline: Option<Airline>,
        pub flight: Option<Flight>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Endpoint {
        pub airport: Option<String>,
        pub scheduled: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Airline {
        pub name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Flight {
        pub iata: Option<String>,
    }

    impl From<FlightData> for FlightLeg {
        fn from(data: FlightData) -> Self {
            let (departure_airport, departure_time) = data
                .departure
                .map_or((None, None), |d| (d.airport, parse_time(d.scheduled)));
            let (arrival_airport, arrival_time) = data
                .arrival
                .map_or((None, None), |a| (a.airport, parse_time(a.scheduled)));

            FlightLeg {
                airline: data.airline.and_then(|a| a.name),
                flight_number: data.flight.and_then(|f| f.iata),
                departure_airport,
                departure_time,
                arrival_airport,
                arrival_time,
                status: data.flight_status,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const FLIGHTS_FIXTURE: &str = r#"{
        "pagination": { "limit": 25, "offset": 0, "count": 2, "total": 2 },
        "data": [
            {
                "flight_date": "2024-06-01",
                "flight_status": "scheduled",
                "departure": {
                    "airport": "Dublin",
                    "iata": "DUB",
                    "scheduled": "2024-06-01T08:15:00+00:00"
                },
                "arrival": {
                    "airport": "Heathrow",
                    "iata": "LHR",
                    "scheduled": "2024-06-01T09:40:00+00:00"
                },
                "airline": { "name": "Aer Lingus", "iata": "EI" },
                "flight": { "number": "154", "iata": "EI154" }
            },
            {
                "flight_date": "2024-06-01",
                "flight_status": "landed",
                "departure": { "airport": "Madrid", "scheduled": null },
                "arrival": { "airport": "Heathrow", "scheduled": "2024-06-01T07:05:00+00:00" },
                "airline": { "name": "empty" },
                "flight": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_flights_response() {
        let response: aviationstack::FlightsResponse = serde_json::from_str(FLIGHTS_FIXTURE).unwrap();
        assert!(response.error.is_none());

        let legs: Vec<FlightLeg> = response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(FlightLeg::from)
            .collect();
        assert_eq!(legs.len(), 2);

        let first = &legs[0];
        assert_eq!(first.airline.as_deref(), Some("Aer Lingus"));
        assert_eq!(first.flight_number.as_deref(), Some("EI154"));
        assert_eq!(first.departure_airport.as_deref(), Some("Dublin"));
        assert_eq!(
            first.arrival_time,
            Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 40, 0).unwrap())
        );
        assert!(first.is_operating());

        let second = &legs[1];
        assert!(second.flight_number.is_none());
        assert!(second.departure_time.is_none());
        assert!(!second.is_operating());
        assert!(second.known_airline().is_none());
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{
            "error": {
                "code": "invalid_access_key",
                "message": "You have not supplied a valid API Access Key."
            }
        }"#;
        let response: aviationstack::FlightsResponse = serde_json::from_str(body).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, "invalid_access_key");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_null_data_means_no_flights() {
        let body = r#"{ "pagination": null, "data": null }"#;
        let response: aviationstack::FlightsResponse = serde_json::from_str(body).unwrap();
        assert!(response.error.is_none());
        assert!(response.data.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        let client = AviationstackClient::new(FlightsConfig::default()).unwrap();
        let err = client.fetch_flights("London").await.unwrap_err();
        assert!(matches!(err, TravelPlannerError::Config { .. }));
    }

    #[tokio::test]
    async fn test_unknown_city_is_provider_failure() {
        let config = FlightsConfig {
            api_key: Some("test_access_key".to_string()),
            ..FlightsConfig::default()
        };
        let client = AviationstackClient::new(config).unwrap();
        let err = client.fetch_flights("Atlantis").await.unwrap_err();
        assert_eq!(err.to_string(), "Flights: no airport code found for Atlantis");
    }
}

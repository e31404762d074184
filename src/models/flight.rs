//! Flight models for arrivals into a destination

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const PLACEHOLDER_AIRLINES: &[&str] = &["unknown", "empty"];

/// A single arriving flight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub airline: Option<String>,
    /// IATA flight number (e.g. "BA117")
    pub flight_number: Option<String>,
    pub departure_airport: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_airport: Option<String>,
    pub arrival_time: Option<DateTime<Utc>>,
    /// Provider status (scheduled, active, landed, cancelled, ...)
    pub status: Option<String>,
}

impl FlightLeg {
    /// Airline name if it is known. Providers fill unknown airlines with
    /// placeholders such as "empty".
    #[must_use]
    pub fn known_airline(&self) -> Option<&str> {
        self.airline.as_deref().map(str::trim).filter(|name| {
            !name.is_empty()
                && !PLACEHOLDER_AIRLINES
                    .iter()
                    .any(|placeholder| name.eq_ignore_ascii_case(placeholder))
        })
    }

    /// Whether the flight is still operating (active or scheduled)
    #[must_use]
    pub fn is_operating(&self) -> bool {
        self.status.as_deref().is_some_and(|status| {
            let status = status.trim();
            status.eq_ignore_ascii_case("active") || status.eq_ignore_ascii_case("scheduled")
        })
    }
}

/// Flights found for a destination airport
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightPayload {
    /// IATA code the search was made for
    pub airport_code: String,
    pub flights: Vec<FlightLeg>,
}

/// Scored flight availability for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airport_code: String,
    pub flights: Vec<FlightLeg>,
    pub total_flights: usize,
    pub unique_airlines: usize,
    /// Availability sub-score (0-100)
    pub availability_score: u8,
}

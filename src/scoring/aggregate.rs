//! Composite scoring and recommendation summary

use tracing::info;

use crate::models::{CompositeResult, FlightRecord, Recommendation, SafetyRecord, WeatherRecord};

/// Weights in tenths: weather 0.4, safety 0.4, flights 0.2
const WEATHER_WEIGHT: u32 = 4;
const SAFETY_WEIGHT: u32 = 4;
const FLIGHT_WEIGHT: u32 = 2;

/// Combine three scored records into a recommendation for `city`.
///
/// Callers must only pass records from successful provider calls.
#[must_use]
pub fn aggregate(
    weather: WeatherRecord,
    safety: SafetyRecord,
    flights: FlightRecord,
    city: &str,
) -> CompositeResult {
    let composite_score = composite_score(weather.score, safety.score, flights.availability_score);
    let recommendation = Recommendation::from_score(composite_score);
    let summary = summarize(city, &weather, &safety, &flights);

    info!(
        "Recommendation for '{}': {} ({}; weather {}, safety {}, flights {})",
        city,
        composite_score,
        recommendation,
        weather.score,
        safety.score,
        flights.availability_score
    );

    CompositeResult {
        destination: city.to_string(),
        composite_score,
        recommendation,
        summary,
        weather,
        safety,
        flights,
    }
}

/// `floor(0.4 * weather + 0.4 * safety + 0.2 * flights)`
#[must_use]
pub fn composite_score(weather: u8, safety: u8, flights: u8) -> u8 {
    let weighted = WEATHER_WEIGHT * u32::from(weather)
        + SAFETY_WEIGHT * u32::from(safety)
        + FLIGHT_WEIGHT * u32::from(flights);
    u8::try_from((weighted / 10).min(100)).unwrap_or(100)
}

/// One-sentence summary naming the destination
#[must_use]
pub fn summarize(
    city: &str,
    weather: &WeatherRecord,
    safety: &SafetyRecord,
    flights: &FlightRecord,
) -> String {
    format!(
        "{city} offers {}, {}, and {}.",
        weather_clause(weather),
        safety_clause(safety),
        flight_clause(flights)
    )
}

fn weather_clause(weather: &WeatherRecord) -> String {
    let quality = match weather.score {
        80.. => "excellent weather",
        60..=79 => "pleasant weather",
        _ => "challenging weather",
    };
    format!(
        "{quality} ({}, {})",
        weather.format_condition(),
        weather.format_temperature()
    )
}

fn safety_clause(safety: &SafetyRecord) -> String {
    let outlook = match safety.score {
        80.. => "a strong safety record",
        60..=79 => "moderate safety concerns",
        _ => "significant safety concerns",
    };
    format!("{outlook} ({} risk)", safety.risk_level)
}

fn flight_clause(flights: &FlightRecord) -> String {
    match flights.total_flights {
        0 => "limited flight options".to_string(),
        1 => "1 available flight".to_string(),
        n => format!("{n} available flights"),
    }
}

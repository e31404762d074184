//! Flight availability scoring

use std::collections::HashSet;

use tracing::debug;

use crate::models::{FlightLeg, FlightPayload, FlightRecord};

const MAX_VARIETY_POINTS: usize = 30;
const POINTS_PER_AIRLINE: usize = 5;
const MAX_STATUS_POINTS: usize = 30;

/// Score arriving flights for a destination airport
#[must_use]
pub fn score_flights(payload: FlightPayload) -> FlightRecord {
    let availability_score = flight_availability_score(&payload.flights);
    let unique_airlines = unique_airline_count(&payload.flights);

    debug!(
        "Flight availability {} for {}: {} flights, {} airlines",
        availability_score,
        payload.airport_code,
        payload.flights.len(),
        unique_airlines
    );

    FlightRecord {
        airport_code: payload.airport_code,
        total_flights: payload.flights.len(),
        unique_airlines,
        flights: payload.flights,
        availability_score,
    }
}

/// Count (0-40) + airline variety (0-30) + operating share (0-30).
///
/// An empty list scores 0.
#[must_use]
pub fn flight_availability_score(flights: &[FlightLeg]) -> u8 {
    if flights.is_empty() {
        return 0;
    }

    let total = count_points(flights.len()) + variety_points(flights) + status_points(flights);
    u8::try_from(total.min(100)).unwrap_or(100)
}

fn count_points(total_flights: usize) -> usize {
    match total_flights {
        10.. => 40,
        5..=9 => 30,
        3..=4 => 20,
        _ => 10,
    }
}

fn variety_points(flights: &[FlightLeg]) -> usize {
    (POINTS_PER_AIRLINE * unique_airline_count(flights)).min(MAX_VARIETY_POINTS)
}

fn status_points(flights: &[FlightLeg]) -> usize {
    if flights.is_empty() {
        return 0;
    }
    let operating = flights.iter().filter(|leg| leg.is_operating()).count();
    (MAX_STATUS_POINTS * operating / flights.len()).min(MAX_STATUS_POINTS)
}

fn unique_airline_count(flights: &[FlightLeg]) -> usize {
    flights
        .iter()
        .filter_map(FlightLeg::known_airline)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn leg(airline: &str, status: &str) -> FlightLeg {
        FlightLeg {
            airline: Some(airline.to_string()),
            status: Some(status.to_string()),
            ..FlightLeg::default()
        }
    }

    fn legs(count: usize, airlines: &[&str], operating: usize) -> Vec<FlightLeg> {
        (0..count)
            .map(|i| {
                let status = if i < operating { "active" } else { "landed" };
                leg(airlines[i % airlines.len()], status)
            })
            .collect()
    }

    #[test]
    fn test_no_flights_scores_zero() {
        assert_eq!(flight_availability_score(&[]), 0);
    }

    #[test]
    fn test_busy_airport() {
        let flights = legs(12, &["Delta", "United", "JetBlue", "American"], 9);
        // 40 + min(30, 20) + floor(30 * 9 / 12)
        assert_eq!(flight_availability_score(&flights), 82);
    }

    #[rstest]
    #[case(1, 10)]
    #[case(2, 10)]
    #[case(3, 20)]
    #[case(4, 20)]
    #[case(5, 30)]
    #[case(9, 30)]
    #[case(10, 40)]
    #[case(100, 40)]
    fn test_count_points(#[case] total: usize, #[case] expected: usize) {
        assert_eq!(count_points(total), expected);
    }

    #[test]
    fn test_variety_is_capped() {
        let airlines = ["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8"];
        let flights = legs(8, &airlines, 0);
        assert_eq!(variety_points(&flights), 30);
    }

    #[test]
    fn test_unknown_airlines_are_not_counted() {
        let mut flights = legs(4, &["Unknown", "", "Iberia", "empty"], 0);
        flights.push(FlightLeg::default());
        assert_eq!(unique_airline_count(&flights), 1);
        assert_eq!(variety_points(&flights), 5);
    }

    #[test]
    fn test_status_counts_active_and_scheduled() {
        let flights = vec![
            leg("KLM", "scheduled"),
            leg("KLM", "ACTIVE"),
            leg("KLM", "cancelled"),
            leg("KLM", "landed"),
        ];
        assert_eq!(status_points(&flights), 15);
    }

    #[test]
    fn test_single_flight() {
        let flights = vec![leg("Aer Lingus", "scheduled")];
        // 10 + 5 + 30
        assert_eq!(flight_availability_score(&flights), 45);
    }

    #[test]
    fn test_perfect_score() {
        let airlines = ["A1", "A2", "A3", "A4", "A5", "A6"];
        let flights = legs(20, &airlines, 20);
        assert_eq!(flight_availability_score(&flights), 100);
    }

    #[test]
    fn test_score_flights_builds_record() {
        let payload = FlightPayload {
            airport_code: "LHR".to_string(),
            flights: legs(5, &["British Airways", "Virgin Atlantic"], 5),
        };
        let record = score_flights(payload);
        assert_eq!(record.airport_code, "LHR");
        assert_eq!(record.total_flights, 5);
        assert_eq!(record.unique_airlines, 2);
        // 30 + 10 + 30
        assert_eq!(record.availability_score, 70);
        assert_eq!(record.flights.len(), 5);
    }

    #[test]
    fn test_empty_payload_record() {
        let record = score_flights(FlightPayload {
            airport_code: "KEF".to_string(),
            flights: vec![],
        });
        assert_eq!(record.total_flights, 0);
        assert_eq!(record.unique_airlines, 0);
        assert_eq!(record.availability_score, 0);
    }
}

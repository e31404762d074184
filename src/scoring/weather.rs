//! Weather suitability scoring

use tracing::{debug, warn};

use crate::models::{WeatherPayload, WeatherRecord};
use crate::{Result, TravelPlannerError};

/// Score used when the payload cannot be scored
pub const FALLBACK_WEATHER_SCORE: u8 = 50;

/// Condition keywords in priority order; the first match wins.
const CONDITION_BANDS: &[(&[&str], u8)] = &[
    (&["sunny", "clear"], 40),
    (&["partly cloudy", "cloudy"], 35),
    (&["overcast"], 25),
    (&["rain", "drizzle"], 15),
    (&["snow", "sleet"], 10),
    (&["storm", "thunder"], 5),
];

const UNRECOGNIZED_CONDITION_SCORE: u8 = 20;

/// Score current weather for a destination.
///
/// Scoring failures (missing or non-finite measurements) degrade to
/// [`FALLBACK_WEATHER_SCORE`] instead of failing the request.
#[must_use]
pub fn score_weather(payload: WeatherPayload) -> WeatherRecord {
    let score = match try_score(&payload) {
        Ok(score) => score,
        Err(e) => {
            warn!(
                "Weather scoring failed for '{}', using fallback score {}: {}",
                payload.location, FALLBACK_WEATHER_SCORE, e
            );
            FALLBACK_WEATHER_SCORE
        }
    };

    WeatherRecord {
        location: payload.location,
        temperature_f: payload.temperature_f,
        condition: payload.condition_text.unwrap_or_default(),
        humidity: payload.humidity,
        wind_mph: payload.wind_mph,
        score,
    }
}

fn try_score(payload: &WeatherPayload) -> Result<u8> {
    let temperature_f = payload
        .temperature_f
        .filter(|t| t.is_finite())
        .ok_or_else(|| TravelPlannerError::computation("temperature is missing"))?;
    let humidity = payload
        .humidity
        .filter(|h| h.is_finite())
        .ok_or_else(|| TravelPlannerError::computation("humidity is missing"))?;
    let condition = payload.condition_text.as_deref().unwrap_or_default();

    let score = weather_score(temperature_f, condition, humidity);
    debug!(
        "Weather score {} for {:.1}°F, '{}', {:.0}% humidity",
        score, temperature_f, condition, humidity
    );
    Ok(score)
}

/// Sum of the temperature (0-40), condition (0-40) and humidity (0-20) bands
#[must_use]
pub fn weather_score(temperature_f: f64, condition: &str, humidity: f64) -> u8 {
    let total = temperature_band(temperature_f) + condition_band(condition) + humidity_band(humidity);
    total.min(100)
}

fn temperature_band(t: f64) -> u8 {
    if (65.0..=80.0).contains(&t) {
        40
    } else if (55.0..65.0).contains(&t) || (t > 80.0 && t <= 85.0) {
        30
    } else if (45.0..55.0).contains(&t) || (t > 85.0 && t <= 90.0) {
        20
    } else {
        10
    }
}

fn condition_band(condition: &str) -> u8 {
    let condition = condition.to_lowercase();
    CONDITION_BANDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(k)))
        .map_or(UNRECOGNIZED_CONDITION_SCORE, |(_, score)| *score)
}

fn humidity_band(h: f64) -> u8 {
    if (30.0..=60.0).contains(&h) {
        20
    } else if (20.0..30.0).contains(&h) || (h > 60.0 && h <= 70.0) {
        15
    } else {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn payload(temperature_f: Option<f64>, condition: Option<&str>, humidity: Option<f64>) -> WeatherPayload {
        WeatherPayload {
            location: "Barcelona, Spain".to_string(),
            temperature_f,
            condition_text: condition.map(str::to_string),
            humidity,
            wind_mph: Some(8.0),
        }
    }

    #[test]
    fn test_ideal_weather_scores_full_marks() {
        assert_eq!(weather_score(70.0, "Sunny", 45.0), 100);
    }

    #[test]
    fn test_stormy_hot_humid_weather() {
        assert_eq!(weather_score(95.0, "Thunderstorm", 80.0), 25);
    }

    #[rstest]
    #[case(65.0, 40)]
    #[case(80.0, 40)]
    #[case(55.0, 30)]
    #[case(64.9, 30)]
    #[case(80.1, 30)]
    #[case(85.0, 30)]
    #[case(45.0, 20)]
    #[case(85.5, 20)]
    #[case(90.0, 20)]
    #[case(44.9, 10)]
    #[case(90.1, 10)]
    #[case(-10.0, 10)]
    fn test_temperature_band(#[case] temperature: f64, #[case] expected: u8) {
        assert_eq!(temperature_band(temperature), expected);
    }

    #[rstest]
    #[case("Sunny", 40)]
    #[case("Clear", 40)]
    #[case("Partly cloudy", 35)]
    #[case("Cloudy", 35)]
    #[case("Overcast", 25)]
    #[case("Patchy light drizzle", 15)]
    #[case("Moderate rain", 15)]
    #[case("Light sleet", 10)]
    #[case("Blowing snow", 10)]
    #[case("Thundery outbreaks possible", 5)]
    #[case("Mist", 20)]
    #[case("", 20)]
    fn test_condition_band(#[case] condition: &str, #[case] expected: u8) {
        assert_eq!(condition_band(condition), expected);
    }

    #[test]
    fn test_condition_priority_first_match_wins() {
        // "clear" outranks "rain"
        assert_eq!(condition_band("Clearing after rain"), 40);
        // "cloudy" outranks "snow"
        assert_eq!(condition_band("Cloudy with snow flurries"), 35);
    }

    #[rstest]
    #[case(30.0, 20)]
    #[case(60.0, 20)]
    #[case(20.0, 15)]
    #[case(65.0, 15)]
    #[case(70.0, 15)]
    #[case(19.0, 10)]
    #[case(71.0, 10)]
    fn test_humidity_band(#[case] humidity: f64, #[case] expected: u8) {
        assert_eq!(humidity_band(humidity), expected);
    }

    #[test]
    fn test_score_is_bounded_over_domain() {
        let conditions = ["Sunny", "Overcast", "Heavy rain", "Snow", "Thunder", "Fog"];
        for temperature in (-40..=130).step_by(5) {
            for humidity in (0..=100).step_by(10) {
                for condition in conditions {
                    let score = weather_score(f64::from(temperature), condition, f64::from(humidity));
                    assert!(score <= 100);
                    assert!(score >= 25);
                }
            }
        }
    }

    #[test]
    fn test_score_weather_builds_record() {
        let record = score_weather(payload(Some(72.0), Some("Partly cloudy"), Some(55.0)));
        assert_eq!(record.score, 95);
        assert_eq!(record.condition, "Partly cloudy");
        assert_eq!(record.location, "Barcelona, Spain");
        assert_eq!(record.wind_mph, Some(8.0));
    }

    #[test]
    fn test_missing_temperature_falls_back_to_neutral() {
        let record = score_weather(payload(None, Some("Sunny"), Some(45.0)));
        assert_eq!(record.score, FALLBACK_WEATHER_SCORE);
    }

    #[test]
    fn test_non_finite_humidity_falls_back_to_neutral() {
        let record = score_weather(payload(Some(70.0), Some("Sunny"), Some(f64::NAN)));
        assert_eq!(record.score, FALLBACK_WEATHER_SCORE);
    }

    #[test]
    fn test_missing_condition_is_unrecognized() {
        let record = score_weather(payload(Some(70.0), None, Some(45.0)));
        assert_eq!(record.score, 40 + 20 + 20);
        assert_eq!(record.condition, "");
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let input = payload(Some(83.0), Some("Light rain shower"), Some(66.0));
        assert_eq!(score_weather(input.clone()), score_weather(input));
    }
}

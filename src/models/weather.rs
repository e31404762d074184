//! Weather models for current conditions at a destination

use serde::{Deserialize, Serialize};

/// Current conditions as reported by the weather provider.
///
/// Every measurement is optional; the scorer decides what a missing
/// value means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    /// Resolved location name (e.g. "Paris, France")
    pub location: String,
    /// Temperature in Fahrenheit
    pub temperature_f: Option<f64>,
    /// Free-text condition (e.g. "Partly cloudy")
    pub condition_text: Option<String>,
    /// Relative humidity percentage (0-100)
    pub humidity: Option<f64>,
    /// Wind speed in miles per hour
    pub wind_mph: Option<f64>,
}

/// Scored weather for a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: String,
    pub temperature_f: Option<f64>,
    pub condition: String,
    pub humidity: Option<f64>,
    pub wind_mph: Option<f64>,
    /// Weather sub-score (0-100)
    pub score: u8,
}

impl WeatherRecord {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        match self.temperature_f {
            Some(temp) if temp.is_finite() => format!("{temp:.0}°F"),
            _ => "unknown temperature".to_string(),
        }
    }

    /// Condition text in lower case, or "unknown conditions"
    #[must_use]
    pub fn format_condition(&self) -> String {
        let condition = self.condition.trim();
        if condition.is_empty() {
            "unknown conditions".to_string()
        } else {
            condition.to_lowercase()
        }
    }
}

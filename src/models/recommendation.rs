//! Composite recommendation returned for a destination

use serde::{Serialize, Serializer};
use std::fmt;

use super::{FlightRecord, SafetyRecord, WeatherRecord};

/// Overall recommendation tier for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// Composite score >= 80
    Excellent,
    /// Composite score >= 70
    Good,
    /// Composite score >= 60
    Consider,
    /// Composite score >= 50
    Caution,
    /// Composite score < 50
    NotRecommended,
}

impl Recommendation {
    #[must_use]
    pub fn from_score(composite_score: u8) -> Self {
        match composite_score {
            80.. => Recommendation::Excellent,
            70..=79 => Recommendation::Good,
            60..=69 => Recommendation::Consider,
            50..=59 => Recommendation::Caution,
            _ => Recommendation::NotRecommended,
        }
    }

    /// Label shown to travellers
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Excellent => "Excellent destination",
            Recommendation::Good => "Good to visit",
            Recommendation::Consider => "Worth considering",
            Recommendation::Caution => "Visit with caution",
            Recommendation::NotRecommended => "Not recommended",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Composite travel recommendation for a destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeResult {
    pub destination: String,
    /// Weighted combination of the three sub-scores (0-100)
    pub composite_score: u8,
    pub recommendation: Recommendation,
    pub summary: String,
    pub weather: WeatherRecord,
    pub safety: SafetyRecord,
    pub flights: FlightRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, Recommendation::Excellent)]
    #[case(80, Recommendation::Excellent)]
    #[case(79, Recommendation::Good)]
    #[case(70, Recommendation::Good)]
    #[case(69, Recommendation::Consider)]
    #[case(60, Recommendation::Consider)]
    #[case(59, Recommendation::Caution)]
    #[case(50, Recommendation::Caution)]
    #[case(49, Recommendation::NotRecommended)]
    #[case(0, Recommendation::NotRecommended)]
    fn test_recommendation_tiers(#[case] score: u8, #[case] expected: Recommendation) {
        assert_eq!(Recommendation::from_score(score), expected);
    }

    #[test]
    fn test_recommendation_serializes_as_label() {
        let json = serde_json::to_string(&Recommendation::Good).unwrap();
        assert_eq!(json, "\"Good to visit\"");
    }
}

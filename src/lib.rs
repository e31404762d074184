//! `TravelPlanner` - destination recommendations from weather, safety and
//! flight availability
//!
//! Each domain is fetched from an external provider, scored on a 0-100
//! scale and combined into a weighted composite with a recommendation tier.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod planner;
pub mod providers;
pub mod scoring;
pub mod web;

// Re-export core types for public API
pub use config::TravelPlannerConfig;
pub use error::{ProviderDomain, TravelPlannerError};
pub use models::{CompositeResult, FlightRecord, Recommendation, RiskLevel, SafetyRecord, WeatherRecord};
pub use planner::{ProviderTimeouts, TravelPlanner};
pub use providers::{FlightProvider, SafetyProvider, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelPlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

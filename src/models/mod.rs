//! Data models for the TravelPlanner service
//!
//! This module contains the request-scoped records organized by concern:
//! - Weather: current conditions and the weather sub-score
//! - Safety: crime news articles, risk level and the safety sub-score
//! - Flight: arriving flight legs and the availability sub-score
//! - Recommendation: the composite result returned to callers

pub mod flight;
pub mod recommendation;
pub mod safety;
pub mod weather;

// Re-export all public types for convenient access
pub use flight::{FlightLeg, FlightPayload, FlightRecord};
pub use recommendation::{CompositeResult, Recommendation};
pub use safety::{NewsArticle, RiskLevel, SafetyPayload, SafetyRecord};
pub use weather::{WeatherPayload, WeatherRecord};

//! Scoring engine
//!
//! This module turns provider payloads into bounded 0-100 sub-scores and
//! combines them into a single recommendation:
//! - Weather scoring from temperature, conditions and humidity
//! - Safety scoring from relevance-filtered crime news
//! - Flight availability scoring from arriving flights
//! - Weighted aggregation, recommendation tiers and summary text
//!
//! Every function here is pure: identical payloads always produce identical
//! records.

pub mod aggregate;
pub mod flights;
pub mod safety;
pub mod weather;

pub use aggregate::{aggregate, composite_score, summarize};
pub use flights::{flight_availability_score, score_flights};
pub use safety::{is_relevant_article, safety_score, score_safety, severity_adjustment};
pub use weather::{score_weather, weather_score, FALLBACK_WEATHER_SCORE};

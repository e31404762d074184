//! Error types and handling for the `TravelPlanner` service

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// External data source a failure originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProviderDomain {
    Weather,
    Safety,
    Flights,
}

impl fmt::Display for ProviderDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderDomain::Weather => "Weather",
            ProviderDomain::Safety => "Safety",
            ProviderDomain::Flights => "Flights",
        };
        f.write_str(name)
    }
}

/// Main error type for the `TravelPlanner` service
#[derive(Error, Debug)]
pub enum TravelPlannerError {
    /// Missing credentials or invalid settings
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream provider failed (network, HTTP status, timeout or bad payload)
    #[error("{domain}: {message}")]
    Provider {
        domain: ProviderDomain,
        message: String,
    },

    /// Scoring could not be computed from the payload
    #[error("Computation error: {message}")]
    Computation { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// At least one provider failed during a composite request
    #[error("Failed to fetch complete data: {}", .failures.join("; "))]
    Incomplete { failures: Vec<String> },
}

impl TravelPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new provider error tagged with its domain
    pub fn provider<S: Into<String>>(domain: ProviderDomain, message: S) -> Self {
        Self::Provider {
            domain,
            message: message.into(),
        }
    }

    pub fn computation<S: Into<String>>(message: S) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Short machine-readable code for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TravelPlannerError::Config { .. } => "CONFIGURATION_ERROR",
            TravelPlannerError::Provider { .. } => "PROVIDER_ERROR",
            TravelPlannerError::Computation { .. } => "COMPUTATION_ERROR",
            TravelPlannerError::Validation { .. } => "INVALID_INPUT",
            TravelPlannerError::Incomplete { .. } => "INCOMPLETE_DATA",
        }
    }
}

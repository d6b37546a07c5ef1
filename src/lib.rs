//! `Skycast` - thin weather lookup service
//!
//! This library provides the core functionality: validating lookup
//! requests, proxying a single provider call, and reshaping the provider
//! payload into a stable consumer-facing report.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod transform;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::{ProviderConfig, ReportConfig, SkycastConfig};
pub use error::SkycastError;
pub use models::{RawWeatherQuery, Units, WeatherConditions, WeatherQuery, WeatherReport};
pub use provider::{OpenWeatherMapProvider, ProviderPayload, WeatherProvider};
pub use transform::build_report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Outbound weather provider boundary
//!
//! The [`WeatherProvider`] trait is the seam between the HTTP handlers and
//! the third-party weather service; tests substitute it with canned payloads.

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt::Debug;

use crate::models::WeatherQuery;

pub mod openweather;

pub use openweather::OpenWeatherMapProvider;

/// A source of current-weather observations
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the raw provider payload for a validated query.
    ///
    /// Fails with an upstream error on timeout, non-2xx status, or a body
    /// that is not valid JSON. Field-level completeness is the transformer's
    /// concern, not the adapter's.
    async fn current_weather(&self, query: &WeatherQuery) -> crate::Result<ProviderPayload>;
}

/// Raw current-weather payload as returned by the provider.
///
/// The shape is controlled by the provider and treated as untrusted: every
/// field is optional so deserialization never fails on absence. The
/// transformer decides which fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderPayload {
    pub name: Option<String>,
    pub main: Option<PayloadMain>,
    pub wind: Option<PayloadWind>,
    pub weather: Option<Vec<PayloadCondition>>,
    pub sys: Option<PayloadSys>,
    /// UTC offset of the location, in seconds
    pub timezone: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub pressure: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadWind {
    pub speed: Option<f64>,
    pub deg: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadCondition {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayloadSys {
    pub country: Option<String>,
    /// Sunrise time, Unix UTC seconds
    pub sunrise: Option<i64>,
    /// Sunset time, Unix UTC seconds
    pub sunset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_missing_and_unknown_fields() {
        let payload: ProviderPayload = serde_json::from_str(
            r#"{"name": "London", "cod": 200, "visibility": 10000}"#,
        )
        .expect("sparse payload should deserialize");

        assert_eq!(payload.name.as_deref(), Some("London"));
        assert!(payload.main.is_none());
        assert!(payload.weather.is_none());
        assert!(payload.timezone.is_none());
    }

    #[test]
    fn payload_parses_full_response() {
        let payload: ProviderPayload = serde_json::from_str(
            r#"{
                "name": "London",
                "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
                "main": {"temp": 15, "feels_like": 14, "humidity": 80, "pressure": 1012},
                "wind": {"speed": 3.1, "deg": 200},
                "weather": [{"main": "Clouds", "description": "overcast clouds", "icon": "04d"}],
                "timezone": 0
            }"#,
        )
        .expect("full payload should deserialize");

        let main = payload.main.expect("main block");
        assert_eq!(main.temp, Some(15.0));
        assert_eq!(payload.timezone, Some(0));
        assert_eq!(
            payload.weather.and_then(|w| w.first().cloned()).and_then(|c| c.icon),
            Some("04d".to_string())
        );
    }
}

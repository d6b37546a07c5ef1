//! Stable consumer-facing weather report

use serde::{Deserialize, Serialize};

/// Current weather condition summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConditions {
    /// General condition group (e.g. "Clouds")
    pub main: String,
    /// Detailed description (e.g. "overcast clouds")
    pub description: String,
    /// Provider icon code (e.g. "04d")
    pub icon: String,
}

/// The stable weather schema guaranteed to consumers regardless of the
/// provider's payload shape.
///
/// Field names and nullability are the public contract; absent optional
/// provider data serializes as `null`, never as a missing key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Resolved location name
    pub location: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
    /// Current temperature in the requested unit system
    pub temperature: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Wind speed in the requested unit system
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: Option<u16>,
    pub weather: WeatherConditions,
    /// Sunrise clock time, "HH:MM"
    pub sunrise: Option<String>,
    /// Sunset clock time, "HH:MM"
    pub sunset: Option<String>,
    /// Location UTC offset in seconds
    pub timezone: Option<i32>,
    /// Report generation time, "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_optionals_serialize_as_null() {
        let report = WeatherReport {
            location: "London".to_string(),
            country: None,
            temperature: 15.0,
            feels_like: 14.0,
            humidity: 80,
            pressure: 1012,
            wind_speed: 3.1,
            wind_direction: None,
            weather: WeatherConditions {
                main: "Clouds".to_string(),
                description: "overcast clouds".to_string(),
                icon: "04d".to_string(),
            },
            sunrise: None,
            sunset: None,
            timezone: None,
            timestamp: "2024-01-15 12:00:00".to_string(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["country"].is_null());
        assert!(json["wind_direction"].is_null());
        assert!(json["sunrise"].is_null());
        assert!(json["timezone"].is_null());
        assert_eq!(json["weather"]["icon"], "04d");
    }
}

//! Inbound query model and validation

use serde::{Deserialize, Serialize};

use crate::SkycastError;

/// Measurement system forwarded to the weather provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, meters per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl Units {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial]
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = SkycastError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(SkycastError::validation(format!(
                "units must be one of: metric, imperial (got '{value}')"
            ))),
        }
    }
}

/// Raw query parameters exactly as the client sent them
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawWeatherQuery {
    pub location: Option<String>,
    pub units: Option<String>,
}

/// A validated weather lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    /// Free-form location string, guaranteed non-empty
    pub location: String,
    /// Requested measurement system, defaulted to metric
    pub units: Units,
}

impl WeatherQuery {
    /// Validate raw query parameters into a [`WeatherQuery`].
    ///
    /// Pure function: no side effects, no lookups. Fails with a validation
    /// error if `location` is absent or empty, or if `units` is present but
    /// not an exact member of the supported set.
    pub fn parse(raw: RawWeatherQuery) -> crate::Result<Self> {
        let location = raw
            .location
            .ok_or_else(|| SkycastError::validation("location is required"))?;

        if location.trim().is_empty() {
            return Err(SkycastError::validation("location must not be empty"));
        }

        let units = match raw.units.as_deref() {
            Some(value) => Units::try_from(value)?,
            None => Units::default(),
        };

        Ok(Self { location, units })
    }
}

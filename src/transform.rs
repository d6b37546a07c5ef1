//! Provider payload to weather report transformation
//!
//! The one nontrivial mapping in the service: required provider fields are
//! copied through verbatim (the provider already applied the requested unit
//! system), optional fields degrade to `null`, and the two Unix sun-event
//! timestamps become local clock times.

use chrono::{DateTime, FixedOffset, Local};

use crate::SkycastError;
use crate::config::ReportConfig;
use crate::models::{WeatherConditions, WeatherReport};
use crate::provider::ProviderPayload;

/// Build a stable [`WeatherReport`] from an untrusted provider payload.
///
/// Fails with a transform error naming the first missing required field;
/// `country`, `wind.deg`, `sys.sunrise`, `sys.sunset` and `timezone` are
/// optional and resolve to `null` when absent.
pub fn build_report(payload: ProviderPayload, options: &ReportConfig) -> crate::Result<WeatherReport> {
    let location = payload
        .name
        .ok_or_else(|| SkycastError::transform("name"))?;
    let main = payload
        .main
        .ok_or_else(|| SkycastError::transform("main"))?;
    let wind = payload
        .wind
        .ok_or_else(|| SkycastError::transform("wind"))?;

    // Only the first condition entry is part of the contract; an empty array
    // is a checked failure, never an index panic.
    let condition = payload
        .weather
        .ok_or_else(|| SkycastError::transform("weather"))?
        .into_iter()
        .next()
        .ok_or_else(|| SkycastError::transform("weather[0]"))?;

    let weather = WeatherConditions {
        main: condition
            .main
            .ok_or_else(|| SkycastError::transform("weather[0].main"))?,
        description: condition
            .description
            .ok_or_else(|| SkycastError::transform("weather[0].description"))?,
        icon: condition
            .icon
            .ok_or_else(|| SkycastError::transform("weather[0].icon"))?,
    };

    let sys = payload.sys.unwrap_or_default();

    Ok(WeatherReport {
        location,
        country: sys.country,
        temperature: main
            .temp
            .ok_or_else(|| SkycastError::transform("main.temp"))?,
        feels_like: main
            .feels_like
            .ok_or_else(|| SkycastError::transform("main.feels_like"))?,
        humidity: main
            .humidity
            .ok_or_else(|| SkycastError::transform("main.humidity"))?,
        pressure: main
            .pressure
            .ok_or_else(|| SkycastError::transform("main.pressure"))?,
        wind_speed: wind
            .speed
            .ok_or_else(|| SkycastError::transform("wind.speed"))?,
        wind_direction: wind.deg,
        weather,
        sunrise: format_sun_time(sys.sunrise, payload.timezone, options),
        sunset: format_sun_time(sys.sunset, payload.timezone, options),
        timezone: payload.timezone,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

/// Format a Unix sun-event timestamp as a "HH:MM" clock time.
///
/// Default behavior matches the original service: the server's local
/// timezone, regardless of where the queried location is. With
/// `sun_times_in_location_time` set, the payload's own UTC offset is used
/// instead. Unrepresentable timestamps degrade to `None`.
fn format_sun_time(unix: Option<i64>, tz_offset: Option<i32>, options: &ReportConfig) -> Option<String> {
    let utc = DateTime::from_timestamp(unix?, 0)?;

    if options.sun_times_in_location_time {
        let offset = FixedOffset::east_opt(tz_offset.unwrap_or(0))?;
        Some(utc.with_timezone(&offset).format("%H:%M").to_string())
    } else {
        Some(utc.with_timezone(&Local).format("%H:%M").to_string())
    }
}

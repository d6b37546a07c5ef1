//! Error types and handling for the `Skycast` service

use thiserror::Error;

/// Main error type for the `Skycast` service
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Upstream weather provider errors (unreachable, timeout, non-2xx, bad JSON)
    #[error("Upstream provider error: {message}")]
    Upstream { message: String },

    /// Provider payload was parseable but missing a required field
    #[error("Provider payload missing required field `{field}`")]
    Transform { field: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkycastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new upstream provider error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new transform error naming the missing payload field
    pub fn transform<S: Into<String>>(field: S) -> Self {
        Self::Transform {
            field: field.into(),
        }
    }

    /// Get a user-friendly error message
    ///
    /// Validation messages are user-fixable and shown verbatim. Upstream and
    /// transform failures collapse to the generic message the API has always
    /// returned; their detail goes to the logs instead.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Validation { message } => message.clone(),
            SkycastError::Upstream { .. } | SkycastError::Transform { .. } => {
                "Failed to fetch weather data".to_string()
            }
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            SkycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SkycastError::config("missing API key");
        assert!(matches!(config_err, SkycastError::Config { .. }));

        let validation_err = SkycastError::validation("location is required");
        assert!(matches!(validation_err, SkycastError::Validation { .. }));

        let upstream_err = SkycastError::upstream("connection refused");
        assert!(matches!(upstream_err, SkycastError::Upstream { .. }));

        let transform_err = SkycastError::transform("main.temp");
        assert!(matches!(transform_err, SkycastError::Transform { .. }));
    }

    #[test]
    fn test_user_messages() {
        let validation_err = SkycastError::validation("location is required");
        assert_eq!(validation_err.user_message(), "location is required");

        let upstream_err = SkycastError::upstream("timed out after 5s");
        assert_eq!(upstream_err.user_message(), "Failed to fetch weather data");

        let transform_err = SkycastError::transform("weather[0]");
        assert_eq!(transform_err.user_message(), "Failed to fetch weather data");
    }

    #[test]
    fn test_transform_error_names_field() {
        let err = SkycastError::transform("main.feels_like");
        assert!(err.to_string().contains("main.feels_like"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let skycast_err: SkycastError = io_err.into();
        assert!(matches!(skycast_err, SkycastError::Io { .. }));
    }
}

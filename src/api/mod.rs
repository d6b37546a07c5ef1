//! Inbound HTTP API
//!
//! One weather route plus a health probe. Handlers return the
//! `{success, data?, message?}` envelope the frontend has always consumed;
//! error mapping keeps validation rejects distinguishable (422, specific
//! message) from upstream and transform failures (500, generic message,
//! detail in the logs only).

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::SkycastError;
use crate::models::{RawWeatherQuery, WeatherQuery, WeatherReport};
use crate::provider::WeatherProvider;
use crate::transform::build_report;
use crate::config::ReportConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
    pub report: ReportConfig,
}

impl AppState {
    #[must_use]
    pub fn new(provider: Arc<dyn WeatherProvider>, report: ReportConfig) -> Self {
        Self { provider, report }
    }
}

/// Standard response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

impl IntoResponse for SkycastError {
    fn into_response(self) -> Response {
        let status = match &self {
            SkycastError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The 500s share one user-facing message; keep their causes apart in
        // the logs.
        match &self {
            SkycastError::Validation { message } => {
                tracing::warn!(%message, "Rejected weather query");
            }
            SkycastError::Upstream { message } => {
                tracing::error!(%message, "Weather provider call failed");
            }
            SkycastError::Transform { field } => {
                tracing::error!(%field, "Provider payload missing required field");
            }
            other => {
                tracing::error!(error = %other, "Request failed");
            }
        }

        let body = ApiResponse::<WeatherReport>::error(self.user_message());
        (status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather/current", get(current_weather))
        .route("/health", get(health))
        .with_state(state)
}

/// `GET /api/weather/current?location=<string>&units=<metric|imperial>`
#[instrument(skip_all)]
async fn current_weather(
    State(state): State<AppState>,
    Query(raw): Query<RawWeatherQuery>,
) -> Result<Json<ApiResponse<WeatherReport>>, SkycastError> {
    let query = WeatherQuery::parse(raw)?;
    let payload = state.provider.current_weather(&query).await?;
    let report = build_report(payload, &state.report)?;
    Ok(Json(ApiResponse::ok(report)))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_absent_halves() {
        let ok = serde_json::to_value(ApiResponse::ok(42)).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["data"], 42);
        assert!(ok.get("message").is_none());

        let err = serde_json::to_value(ApiResponse::<u32>::error("nope".to_string())).unwrap();
        assert_eq!(err["success"], false);
        assert_eq!(err["message"], "nope");
        assert!(err.get("data").is_none());
    }

    #[test]
    fn validation_errors_map_to_422() {
        let response = SkycastError::validation("location is required").into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn upstream_and_transform_errors_map_to_500() {
        let response = SkycastError::upstream("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = SkycastError::transform("main.temp").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

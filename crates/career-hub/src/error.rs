use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::jobs::JobServiceError;
use crate::workflows::talent::TalentServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Data(serde_json::Error),
    Talent(TalentServiceError),
    Jobs(JobServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Data(err) => write!(f, "invalid data: {}", err),
            AppError::Talent(err) => write!(f, "talent search error: {}", err),
            AppError::Jobs(err) => write!(f, "job posting error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Data(err) => Some(err),
            AppError::Talent(err) => Some(err),
            AppError::Jobs(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Data(_) => StatusCode::BAD_REQUEST,
            AppError::Jobs(JobServiceError::Validation(_))
            | AppError::Jobs(JobServiceError::UnknownCompany(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Talent(_)
            | AppError::Jobs(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Data(value)
    }
}

impl From<TalentServiceError> for AppError {
    fn from(value: TalentServiceError) -> Self {
        Self::Talent(value)
    }
}

impl From<JobServiceError> for AppError {
    fn from(value: JobServiceError) -> Self {
        Self::Jobs(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failures_map_to_unprocessable() {
        let response = AppError::from(JobServiceError::Validation("title is required")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn malformed_input_maps_to_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
        let app = AppError::from(err);
        assert!(app.to_string().starts_with("invalid data"));
        assert_eq!(app.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

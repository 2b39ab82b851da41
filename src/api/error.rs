//! HTTP error mapping.
//!
//! Error bodies use the `{"detail": "..."}` shape.

use crate::activity::{
    ports::ActivityRegistryError,
    services::{ActivityRegistryServiceError, RegistryErrorKind},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The registry rejected the request.
    #[error(transparent)]
    Registry(#[from] ActivityRegistryServiceError),

    /// The `email` query parameter was absent.
    #[error("email query parameter is required")]
    MissingEmail,
}

impl ApiError {
    /// Builds the error for an activity name that is not in the catalog.
    #[must_use]
    pub fn activity_not_found(name: &str) -> Self {
        Self::Registry(ActivityRegistryError::NotFound(name.to_owned()).into())
    }

    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Registry(err) => match err.kind() {
                RegistryErrorKind::NotFound => StatusCode::NOT_FOUND,
                RegistryErrorKind::AlreadyRegistered
                | RegistryErrorKind::NotSignedUp
                | RegistryErrorKind::ActivityFull => StatusCode::BAD_REQUEST,
                RegistryErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
                RegistryErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Returns the client-visible detail message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::MissingEmail => self.to_string(),
            Self::Registry(err) => match err.kind() {
                RegistryErrorKind::NotFound => "Activity not found".to_owned(),
                RegistryErrorKind::AlreadyRegistered => {
                    "Student already signed up for this activity".to_owned()
                }
                RegistryErrorKind::NotSignedUp => {
                    "Student is not signed up for this activity".to_owned()
                }
                RegistryErrorKind::ActivityFull => "Activity is full".to_owned(),
                RegistryErrorKind::InvalidInput => err.to_string(),
                RegistryErrorKind::Internal => "Internal server error".to_owned(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

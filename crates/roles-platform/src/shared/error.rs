//! Platform Error Types

use thiserror::Error;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};

use crate::shared::api_common::{NoPayload, ResponseEnvelope};

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("{message}")]
    MissingParameter { message: String },

    #[error("The role already exists, choose another name.")]
    DuplicateName { name: String },

    #[error("The {entity_type} was not found.")]
    NotFound { entity_type: String, id: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("The method {method} is not allowed for this resource.")]
    MethodNotAllowed { method: String },
}

impl PlatformError {
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::MissingParameter { message: message.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn method_not_allowed(method: impl Into<String>) -> Self {
        Self::MethodNotAllowed { method: method.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PlatformError::MissingParameter { .. } => StatusCode::BAD_REQUEST,
            PlatformError::DuplicateName { .. } => StatusCode::BAD_REQUEST,
            PlatformError::Validation { .. } => StatusCode::BAD_REQUEST,
            PlatformError::NotFound { .. } => StatusCode::NOT_FOUND,
            PlatformError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlatformError>;

impl From<JsonRejection> for PlatformError {
    fn from(rejection: JsonRejection) -> Self {
        PlatformError::validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for PlatformError {
    fn from(rejection: PathRejection) -> Self {
        PlatformError::validation(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = ?self, status = status.as_u16(), "Request rejected");

        let body = ResponseEnvelope::<NoPayload>::failure(self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PlatformError::missing_parameter("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PlatformError::duplicate_name("Admin").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PlatformError::validation("bad").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(PlatformError::not_found("role", "abc").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            PlatformError::method_not_allowed("PATCH").status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PlatformError::not_found("role", "abc").to_string(),
            "The role was not found."
        );
        assert_eq!(
            PlatformError::duplicate_name("admin").to_string(),
            "The role already exists, choose another name."
        );
        assert_eq!(
            PlatformError::missing_parameter("The id parameter is required.").to_string(),
            "The id parameter is required."
        );
        assert_eq!(
            PlatformError::method_not_allowed("PATCH").to_string(),
            "The method PATCH is not allowed for this resource."
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = PlatformError::not_found("role", "abc").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

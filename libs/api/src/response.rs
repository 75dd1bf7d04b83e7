use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse, Json};
use entity::prelude::*;
use repository::RepositoryError;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

#[derive(Serialize, ToSchema)]
pub struct ValidationResp {
    pub message: String,
    pub errors: Vec<FieldErrorResp>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorResp {
    pub field: String,
    /// `InvalidValue` or `DuplicateValue`
    pub kind: String,
    pub message: String,
}

impl From<ValidationErrors> for ValidationResp {
    fn from(value: ValidationErrors) -> Self {
        Self {
            message: value.to_string(),
            errors: value
                .errors
                .into_iter()
                .map(|e| FieldErrorResp {
                    field: e.field.to_string(),
                    kind: e.kind.to_string(),
                    message: e.message,
                })
                .collect(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            ApiError::ValidationError(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationResp::from(errors)),
            )
                .into_response(),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| match e {
            RepositoryError::Validation(errors) => {
                ApiError::ValidationError(errors)
            }
            RepositoryError::NotFound { .. } => {
                ApiError::NotFound(e.to_string())
            }
            RepositoryError::InSeaOrmDbErr { .. } => {
                error!(error_code = %error_code, error = ?e);
                ApiError::ServerError(error_message(error_code))
            }
        })
    }
}

fn error_codes() -> &'static Map<String, Value> {
    static ERROR_CODES: OnceLock<Map<String, Value>> = OnceLock::new();
    ERROR_CODES.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or_default()
    })
}

pub(crate) fn error_message(error_code: &str) -> String {
    error_codes()
        .get(error_code)
        .and_then(Value::as_str)
        .unwrap_or("unexpected error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_parse() {
        assert!(!error_codes().is_empty());
        assert_eq!(error_message("502-001"), "failed to get authors");
        assert_eq!(error_message("999-999"), "unexpected error");
    }

    #[test]
    fn test_validation_resp() {
        // Arrange
        let mut errors = ValidationErrors::new();
        errors.push(entity::author::duplicate_name());

        // Act
        let resp = ValidationResp::from(errors);

        // Assert
        assert_eq!(resp.message, "validation failed for 1 field(s)");
        assert_eq!(resp.errors[0].field, "name");
        assert_eq!(resp.errors[0].kind, "DuplicateValue");
    }
}

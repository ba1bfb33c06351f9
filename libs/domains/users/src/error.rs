use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::RequiredField;

/// Message returned to clients when registering an email that is already taken
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Ya existe un usuario con el correo";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Required field '{0}' is missing")]
    ValidationFailed(RequiredField),

    #[error("User with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::ValidationFailed(field) => {
                AppError::UnprocessableEntity(field.message().to_string())
            }
            UserError::DuplicateEmail(email) => {
                tracing::debug!(email = %email, "Rejected duplicate registration");
                AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string())
            }
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Blank required fields on create; one message per violation.
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("{0}")]
    NotFound(String),
    /// The store rejected a write (constraint violation).
    #[error("{0}")]
    DataIntegrity(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Error body shape shared by every failing response.
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
}

impl ApiError {
    /// Constraint violations map to 400, everything else from the driver is
    /// an internal failure.
    pub fn from_write_error(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return ApiError::DataIntegrity(db_err.to_string());
                }
                _ => {}
            }
        }
        ApiError::Database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                format!("Validación fallida: {}", violations.join(", ")),
            ),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::DataIntegrity(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Error de integridad de datos: {}", detail),
            ),
            ApiError::Database(err) => {
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", err),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

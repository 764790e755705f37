use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use backend_domain::domain::errors::DomainError;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed input, reported as a field -> message map.
    #[error("validation failed")]
    Validation(HashMap<String, String>),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            // Single-field domain validation failures keep the same 400 shape.
            AppError::Domain(DomainError::Validation { field, message }) => {
                let errors = HashMap::from([(field, message)]);
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            // Every provider-side failure surfaces uniformly as a 500 with a
            // plain-text message; no retry, no transient/permanent distinction.
            AppError::Domain(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

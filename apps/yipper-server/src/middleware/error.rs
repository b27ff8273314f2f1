//! Error handling middleware.
//!
//! The yipper client reads most failures in-band: a `200 OK` whose plain-text
//! body explains what went wrong. Only malformed requests and store failures
//! use real error statuses, with RFC 7807 bodies.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;
use yipper_shared::ErrorResponse;

use yipper_core::{DomainError, RepoError};

pub const MISSING_LIKE_PARAMS: &str = "Missing one or more of the required params";
pub const MISSING_NEW_YIP_PARAMS: &str = "Missing one or more of the required params.";
pub const UNKNOWN_ID: &str = "Yikes. ID does not exist.";
pub const UNKNOWN_USER: &str = "Yikes. User does not exist.";

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required body parameter was absent or empty.
    #[error("{0}")]
    MissingParams(&'static str),

    #[error("{}", UNKNOWN_ID)]
    UnknownId,

    #[error("{}", UNKNOWN_USER)]
    UnknownUser,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParams(_) | AppError::UnknownId | AppError::UnknownUser => {
                StatusCode::OK
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MissingParams(_) | AppError::UnknownId | AppError::UnknownUser => {
                tracing::warn!(reason = %self, "Rejected request");
                HttpResponse::build(self.status_code())
                    .content_type(ContentType::plaintext())
                    .body(self.to_string())
            }
            AppError::BadRequest(detail) => {
                HttpResponse::build(self.status_code()).json(ErrorResponse::bad_request(detail))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).json(ErrorResponse::internal_error())
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::UnknownId,
            DomainError::UnknownAuthor(_) => AppError::UnknownUser,
            DomainError::Repo(repo) => repo.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::bad_request(msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApplicationError::Gone(msg) => Self::new(StatusCode::GONE, "EXPIRED", msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "CONFLICT", msg),
            ApplicationError::Unauthorized(msg) => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            ApplicationError::Forbidden(msg) => Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", msg),
            ApplicationError::Infrastructure(msg) => Self::internal(msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::InvalidSlot(_)
            | DomainError::OverlapDetected(_)
            | DomainError::Validation(_) => Self::bad_request(message),
            DomainError::Unauthorized(_) => {
                Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
            }
            DomainError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message),
            DomainError::Conflict(_) => Self::new(StatusCode::CONFLICT, "CONFLICT", message),
            DomainError::RandomSourceUnavailable(_)
            | DomainError::GenerationFailed(_)
            | DomainError::Persistence(_) => Self::internal(message),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message.into())
    }

    fn internal(message: String) -> Self {
        tracing::error!(error = %message, "request failed");
        // storage and entropy details stay in the logs
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "internal server error".into(),
        )
    }

    pub(crate) fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        Self {
            status,
            code,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            code: self.code.to_string(),
        };
        (self.status, Json(payload)).into_response()
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Canonical HTTP reason phrase.
    pub error: String,
    pub message: String,
    /// One of INVALID_REQUEST, UNAUTHORIZED, FORBIDDEN, NOT_FOUND, EXPIRED,
    /// CONFLICT, INTERNAL_ERROR.
    pub code: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

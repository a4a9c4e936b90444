// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("random source unavailable: {0}")]
    RandomSourceUnavailable(String),
    #[error("schedule generation failed: {0}")]
    GenerationFailed(String),
    #[error("invalid time slot: {0}")]
    InvalidSlot(String),
    #[error("time slots overlap: {0}")]
    OverlapDetected(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

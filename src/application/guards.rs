// src/application/guards.rs
//! Checks shared by every path that touches a loaded schedule.
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::schedule::{EditToken, Schedule},
};
use chrono::{DateTime, Utc};

/// A missing or blank token means the caller did not try to authenticate.
pub fn require_edit_token(presented: Option<&str>) -> ApplicationResult<&str> {
    match presented {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ApplicationError::unauthorized("edit token is required")),
    }
}

pub fn parse_edit_token(presented: &str) -> ApplicationResult<EditToken> {
    EditToken::new(presented).map_err(|_| ApplicationError::unauthorized("edit token is required"))
}

pub fn ensure_active(schedule: &Schedule, now: DateTime<Utc>) -> ApplicationResult<()> {
    if schedule.is_expired(now) {
        return Err(ApplicationError::gone("schedule has expired"));
    }
    Ok(())
}

/// A present but non-matching token is a failed attempt, not a missing one.
pub fn ensure_edit_token(schedule: &Schedule, presented: &str) -> ApplicationResult<()> {
    schedule
        .verify_edit_token(presented)
        .map_err(|_| ApplicationError::forbidden("invalid edit token"))
}

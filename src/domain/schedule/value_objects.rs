use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::secrets::{self, EntropySource};
use std::fmt;

/// Public identifier of a schedule. Anyone holding it may read the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("schedule id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn generate(entropy: &dyn EntropySource) -> DomainResult<Self> {
        secrets::new_identifier(entropy).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ScheduleId> for String {
    fn from(value: ScheduleId) -> Self {
        value.0
    }
}

/// Bearer secret that authorizes mutation of one schedule.
///
/// `Debug` is redacted so the token never ends up in logs by accident.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EditToken(String);

impl EditToken {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("edit token cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn generate(entropy: &dyn EntropySource) -> DomainResult<Self> {
        secrets::new_edit_token(entropy).map(Self)
    }

    /// Exact, case-sensitive, constant-time comparison against a presented value.
    pub fn matches(&self, presented: &str) -> bool {
        secrets::constant_time_eq(self.0.as_bytes(), presented.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for EditToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EditToken(<redacted>)")
    }
}

// src/domain/schedule/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::secrets::EntropySource;
use crate::domain::schedule::time_slot::TimeSlot;
use crate::domain::schedule::value_objects::{EditToken, ScheduleId};
use chrono::{DateTime, Duration, Utc};

/// Lifetime of every schedule, counted from creation.
pub const SCHEDULE_TTL_DAYS: i64 = 7;

pub fn schedule_ttl() -> Duration {
    Duration::days(SCHEDULE_TTL_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleState {
    Active,
    Expired,
}

/// Aggregate root for a shared set of candidate slots.
///
/// `id`, `edit_token`, `created_at` and `expires_at` are fixed at
/// construction. Slots are only ever replaced as a whole, after the
/// candidate collection passed [`Schedule::validate_time_slots`].
#[derive(Debug, Clone)]
pub struct Schedule {
    id: ScheduleId,
    edit_token: EditToken,
    time_slots: Vec<TimeSlot>,
    comment: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revision: i64,
}

impl Schedule {
    pub fn new(entropy: &dyn EntropySource, now: DateTime<Utc>) -> DomainResult<Self> {
        let id = ScheduleId::generate(entropy).map_err(generation_failed)?;
        let edit_token = EditToken::generate(entropy).map_err(generation_failed)?;

        Ok(Self {
            id,
            edit_token,
            time_slots: Vec::new(),
            comment: String::new(),
            created_at: now,
            expires_at: now + schedule_ttl(),
            revision: 0,
        })
    }

    /// Rebuild an aggregate from storage. No invariant is re-derived here;
    /// the stored `expires_at` is authoritative.
    pub fn restore(
        id: ScheduleId,
        edit_token: EditToken,
        time_slots: Vec<TimeSlot>,
        comment: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        revision: i64,
    ) -> Self {
        Self {
            id,
            edit_token,
            time_slots,
            comment,
            created_at,
            expires_at,
            revision,
        }
    }

    pub fn id(&self) -> &ScheduleId {
        &self.id
    }

    pub fn edit_token(&self) -> &EditToken {
        &self.edit_token
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn revision(&self) -> i64 {
        self.revision
    }

    /// Per-slot ordering first, then every unordered pair for overlap.
    /// The first violation wins.
    pub fn validate_time_slots(slots: &[TimeSlot]) -> DomainResult<()> {
        for slot in slots {
            slot.validate()?;
        }

        for (i, first) in slots.iter().enumerate() {
            for second in &slots[i + 1..] {
                if first.overlaps(second) {
                    return Err(DomainError::OverlapDetected(format!(
                        "{} overlaps {}",
                        first.label(),
                        second.label()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Validate the candidate collection and commit it only if it passes.
    pub fn replace_time_slots(&mut self, slots: Vec<TimeSlot>) -> DomainResult<()> {
        Self::validate_time_slots(&slots)?;
        self.time_slots = slots;
        Ok(())
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn verify_edit_token(&self, presented: &str) -> DomainResult<()> {
        if presented.is_empty() || !self.edit_token.matches(presented) {
            return Err(DomainError::Unauthorized("invalid edit token".into()));
        }
        Ok(())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn state(&self, now: DateTime<Utc>) -> ScheduleState {
        if self.is_expired(now) {
            ScheduleState::Expired
        } else {
            ScheduleState::Active
        }
    }

    /// Stamp the revision assigned by the store after a successful write.
    pub fn with_revision(mut self, revision: i64) -> Self {
        self.revision = revision;
        self
    }
}

fn generation_failed(err: DomainError) -> DomainError {
    DomainError::GenerationFailed(err.to_string())
}

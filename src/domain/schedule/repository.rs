use crate::domain::errors::DomainResult;
use crate::domain::schedule::entity::Schedule;
use crate::domain::schedule::value_objects::{EditToken, ScheduleId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage contract for schedules. Implementations must serialize the
/// read-validate-write cycle per id: `update` fails with
/// `DomainError::Conflict` when the stored revision is not the one the
/// caller loaded.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the id is already taken.
    async fn create(&self, schedule: &Schedule) -> DomainResult<()>;
    async fn find_by_id(&self, id: &ScheduleId) -> DomainResult<Option<Schedule>>;
    async fn find_by_edit_token(&self, token: &EditToken) -> DomainResult<Option<Schedule>>;
    /// Returns the stored aggregate carrying its new revision.
    async fn update(&self, schedule: &Schedule) -> DomainResult<Schedule>;
    async fn delete(&self, id: &ScheduleId) -> DomainResult<()>;
    /// Physically remove schedules whose expiry lies before `now`.
    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}

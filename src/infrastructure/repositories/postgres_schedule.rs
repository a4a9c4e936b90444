use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::{EditToken, Schedule, ScheduleId, ScheduleRepository, TimeSlot};
use crate::infrastructure::repositories::error::map_sqlx;
use crate::infrastructure::repositories::records::{TimeSlotRecord, slot_records};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use std::sync::Arc;

const SCHEDULE_COLUMNS: &str =
    "id, edit_token, time_slots, comment, created_at, expires_at, revision";

#[derive(Clone)]
pub struct PostgresScheduleRepository {
    pool: Arc<PgPool>,
}

impl PostgresScheduleRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &ScheduleId) -> DomainResult<bool> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1::BIGINT FROM schedules WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found.is_some())
    }
}

#[derive(Debug, FromRow)]
struct ScheduleRow {
    id: String,
    edit_token: String,
    time_slots: Json<Vec<TimeSlotRecord>>,
    comment: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revision: i64,
}

impl TryFrom<ScheduleRow> for Schedule {
    type Error = DomainError;

    fn try_from(row: ScheduleRow) -> Result<Self, Self::Error> {
        Ok(Schedule::restore(
            ScheduleId::new(row.id)?,
            EditToken::new(row.edit_token)?,
            row.time_slots.0.into_iter().map(TimeSlot::from).collect(),
            row.comment,
            row.created_at,
            row.expires_at,
            row.revision,
        ))
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn create(&self, schedule: &Schedule) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO schedules (id, edit_token, time_slots, comment, created_at, expires_at, revision) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(schedule.id().as_str())
        .bind(schedule.edit_token().as_str())
        .bind(Json(slot_records(schedule)))
        .bind(schedule.comment())
        .bind(schedule.created_at())
        .bind(schedule.expires_at())
        .bind(schedule.revision())
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &ScheduleId) -> DomainResult<Option<Schedule>> {
        let row = sqlx::query_as::<_, ScheduleRow>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedules WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Schedule::try_from).transpose()
    }

    async fn find_by_edit_token(&self, token: &EditToken) -> DomainResult<Option<Schedule>> {
        let row = sqlx::query_as::<_, ScheduleRow>(&format!(
            "SELECT {SCHEDULE_COLUMNS} FROM schedules WHERE edit_token = $1"
        ))
        .bind(token.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Schedule::try_from).transpose()
    }

    async fn update(&self, schedule: &Schedule) -> DomainResult<Schedule> {
        // compare-and-swap on the revision the caller loaded
        let row = sqlx::query_as::<_, ScheduleRow>(&format!(
            "UPDATE schedules SET time_slots = $1, comment = $2, revision = revision + 1 WHERE id = $3 AND revision = $4 RETURNING {SCHEDULE_COLUMNS}"
        ))
        .bind(Json(slot_records(schedule)))
        .bind(schedule.comment())
        .bind(schedule.id().as_str())
        .bind(schedule.revision())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Schedule::try_from(row),
            None if self.exists(schedule.id()).await? => Err(DomainError::Conflict(
                "schedule was modified concurrently".into(),
            )),
            None => Err(DomainError::NotFound("schedule not found".into())),
        }
    }

    async fn delete(&self, id: &ScheduleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("schedule not found".into()));
        }
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM schedules WHERE expires_at < $1")
            .bind(now)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

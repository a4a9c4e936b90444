// src/infrastructure/repositories/redis_schedule.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::{EditToken, Schedule, ScheduleId, ScheduleRepository};
use crate::infrastructure::repositories::error::map_redis;
use crate::infrastructure::repositories::records::ScheduleDocument;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;

fn schedule_key(id: &str) -> String {
    format!("schedule:{id}")
}

fn edit_token_key(token: &str) -> String {
    format!("schedule:edit:{token}")
}

// Inserts the document and its token index only when neither key exists.
// Returns 1 on success, 0 when the id is taken, -1 when the token is taken.
const CREATE_SCRIPT: &str = r#"
    if redis.call('EXISTS', KEYS[1]) == 1 then
        return 0
    end
    if redis.call('EXISTS', KEYS[2]) == 1 then
        return -1
    end
    redis.call('SET', KEYS[1], ARGV[1])
    redis.call('SET', KEYS[2], ARGV[2])
    redis.call('EXPIREAT', KEYS[1], ARGV[3])
    redis.call('EXPIREAT', KEYS[2], ARGV[3])
    return 1
"#;

// Replaces the document when the stored revision still equals ARGV[2].
// Returns 1 on success, 0 on a stale revision, -1 when the key is gone.
const UPDATE_SCRIPT: &str = r#"
    local cur = redis.call('GET', KEYS[1])
    if not cur then
        return -1
    end
    if cjson.decode(cur)['revision'] ~= tonumber(ARGV[2]) then
        return 0
    end
    redis.call('SET', KEYS[1], ARGV[1], 'KEEPTTL')
    return 1
"#;

/// Document store keyed by schedule id with a secondary key per edit token.
/// Both keys carry an absolute expiry of `expires_at + retention`, so Redis
/// drops expired schedules on its own and the sweeper has nothing to do.
#[derive(Clone)]
pub struct RedisScheduleRepository {
    pool: Pool,
    retention: Duration,
}

impl RedisScheduleRepository {
    /// Create a new Redis backed repository from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str, retention: Duration) -> DomainResult<Self> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| DomainError::Persistence(err.to_string()))?;

        Ok(Self { pool, retention })
    }

    async fn conn(&self) -> DomainResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| DomainError::Persistence(err.to_string()))
    }

    async fn load(&self, conn: &mut Connection, id: &str) -> DomainResult<Option<Schedule>> {
        let raw: Option<String> = conn.get(schedule_key(id)).await.map_err(map_redis)?;
        raw.map(|json| ScheduleDocument::from_json(&json).and_then(Schedule::try_from))
            .transpose()
    }
}

#[async_trait]
impl ScheduleRepository for RedisScheduleRepository {
    async fn create(&self, schedule: &Schedule) -> DomainResult<()> {
        let drop_at = schedule
            .expires_at()
            .checked_add_signed(self.retention)
            .ok_or_else(|| DomainError::Validation("retention window is out of range".into()))?
            .timestamp();
        let document = ScheduleDocument::from(schedule).to_json()?;
        let mut conn = self.conn().await?;

        let created: i32 = redis::cmd("EVAL")
            .arg(CREATE_SCRIPT)
            .arg(2)
            .arg(schedule_key(schedule.id().as_str()))
            .arg(edit_token_key(schedule.edit_token().as_str()))
            .arg(document)
            .arg(schedule.id().as_str())
            .arg(drop_at)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        match created {
            1 => Ok(()),
            0 => Err(DomainError::Conflict("schedule id already exists".into())),
            _ => Err(DomainError::Conflict("edit token already in use".into())),
        }
    }

    async fn find_by_id(&self, id: &ScheduleId) -> DomainResult<Option<Schedule>> {
        let mut conn = self.conn().await?;
        self.load(&mut conn, id.as_str()).await
    }

    async fn find_by_edit_token(&self, token: &EditToken) -> DomainResult<Option<Schedule>> {
        let mut conn = self.conn().await?;
        let id: Option<String> = conn
            .get(edit_token_key(token.as_str()))
            .await
            .map_err(map_redis)?;
        let Some(id) = id else {
            return Ok(None);
        };

        // the index can briefly outlive a deleted document
        Ok(self
            .load(&mut conn, &id)
            .await?
            .filter(|schedule| schedule.edit_token().matches(token.as_str())))
    }

    async fn update(&self, schedule: &Schedule) -> DomainResult<Schedule> {
        let mut conn = self.conn().await?;
        let next = schedule.clone().with_revision(schedule.revision() + 1);
        let document = ScheduleDocument::from(&next).to_json()?;

        let replaced: i32 = redis::cmd("EVAL")
            .arg(UPDATE_SCRIPT)
            .arg(1)
            .arg(schedule_key(schedule.id().as_str()))
            .arg(document)
            .arg(schedule.revision())
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        match replaced {
            1 => Ok(next),
            0 => Err(DomainError::Conflict(
                "schedule was modified concurrently".into(),
            )),
            _ => Err(DomainError::NotFound("schedule not found".into())),
        }
    }

    async fn delete(&self, id: &ScheduleId) -> DomainResult<()> {
        let mut conn = self.conn().await?;
        let schedule = self
            .load(&mut conn, id.as_str())
            .await?
            .ok_or_else(|| DomainError::NotFound("schedule not found".into()))?;

        let removed: i64 = conn
            .del(vec![
                schedule_key(id.as_str()),
                edit_token_key(schedule.edit_token().as_str()),
            ])
            .await
            .map_err(map_redis)?;

        if removed == 0 {
            return Err(DomainError::NotFound("schedule not found".into()));
        }
        Ok(())
    }

    async fn purge_expired(&self, _now: DateTime<Utc>) -> DomainResult<u64> {
        // keys expire through EXPIREAT
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::secrets::test_support::OsTestEntropy;

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(schedule_key("abc"), "schedule:abc");
        assert_eq!(edit_token_key("ff00"), "schedule:edit:ff00");
    }

    #[tokio::test]
    async fn out_of_range_retention_fails_before_touching_redis() {
        // nothing listens on port 1; the pool connects lazily
        let repo = RedisScheduleRepository::from_url("redis://127.0.0.1:1/0", Duration::MAX)
            .unwrap();
        let now = Utc::now();
        let schedule = Schedule::new(&OsTestEntropy, now).unwrap();

        let err = repo.create(&schedule).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

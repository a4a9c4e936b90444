// tests/support/mocks/repos.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kareru::domain::errors::{DomainError, DomainResult};
use kareru::domain::schedule::{EditToken, Schedule, ScheduleId, ScheduleRepository};
use kareru::infrastructure::repositories::InMemoryScheduleRepository;

/// すべての操作がストレージ障害で失敗するリポジトリ
pub struct FailingRepo;

fn unavailable<T>() -> DomainResult<T> {
    Err(DomainError::Persistence("connection refused".into()))
}

#[async_trait]
impl ScheduleRepository for FailingRepo {
    async fn create(&self, _schedule: &Schedule) -> DomainResult<()> {
        unavailable()
    }
    async fn find_by_id(&self, _id: &ScheduleId) -> DomainResult<Option<Schedule>> {
        unavailable()
    }
    async fn find_by_edit_token(&self, _token: &EditToken) -> DomainResult<Option<Schedule>> {
        unavailable()
    }
    async fn update(&self, _schedule: &Schedule) -> DomainResult<Schedule> {
        unavailable()
    }
    async fn delete(&self, _id: &ScheduleId) -> DomainResult<()> {
        unavailable()
    }
    async fn purge_expired(&self, _now: DateTime<Utc>) -> DomainResult<u64> {
        unavailable()
    }
}

/// 読み込みと書き込みの間に別の編集が割り込んだ状況を再現する。
/// 読み込みは内部ストアに委譲し、更新は常に競合として拒否する。
#[derive(Default)]
pub struct StaleWriteRepo {
    pub inner: InMemoryScheduleRepository,
}

#[async_trait]
impl ScheduleRepository for StaleWriteRepo {
    async fn create(&self, schedule: &Schedule) -> DomainResult<()> {
        self.inner.create(schedule).await
    }
    async fn find_by_id(&self, id: &ScheduleId) -> DomainResult<Option<Schedule>> {
        self.inner.find_by_id(id).await
    }
    async fn find_by_edit_token(&self, token: &EditToken) -> DomainResult<Option<Schedule>> {
        self.inner.find_by_edit_token(token).await
    }
    async fn update(&self, _schedule: &Schedule) -> DomainResult<Schedule> {
        Err(DomainError::Conflict(
            "schedule was modified concurrently".into(),
        ))
    }
    async fn delete(&self, id: &ScheduleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        self.inner.purge_expired(now).await
    }
}

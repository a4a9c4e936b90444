// src/infrastructure/repositories/memory_schedule.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::{EditToken, Schedule, ScheduleId, ScheduleRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
struct Store {
    // id -> schedule
    schedules: HashMap<String, Schedule>,
    // edit token -> id
    tokens: HashMap<String, String>,
}

/// Process-local store for development and tests. One lock guards both maps,
/// so every update's revision check and write happen atomically.
#[derive(Default)]
pub struct InMemoryScheduleRepository {
    inner: RwLock<Store>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|store| store.schedules.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Persistence("schedule store lock poisoned".into())
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn create(&self, schedule: &Schedule) -> DomainResult<()> {
        let mut store = self.inner.write().map_err(poisoned)?;
        let id = schedule.id().as_str();
        if store.schedules.contains_key(id) {
            return Err(DomainError::Conflict("schedule id already exists".into()));
        }
        let token = schedule.edit_token().as_str();
        if store.tokens.contains_key(token) {
            return Err(DomainError::Conflict("edit token already in use".into()));
        }

        store.tokens.insert(token.to_string(), id.to_string());
        store.schedules.insert(id.to_string(), schedule.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ScheduleId) -> DomainResult<Option<Schedule>> {
        let store = self.inner.read().map_err(poisoned)?;
        Ok(store.schedules.get(id.as_str()).cloned())
    }

    async fn find_by_edit_token(&self, token: &EditToken) -> DomainResult<Option<Schedule>> {
        let store = self.inner.read().map_err(poisoned)?;
        Ok(store
            .tokens
            .get(token.as_str())
            .and_then(|id| store.schedules.get(id))
            .cloned())
    }

    async fn update(&self, schedule: &Schedule) -> DomainResult<Schedule> {
        let mut store = self.inner.write().map_err(poisoned)?;
        let current = store
            .schedules
            .get(schedule.id().as_str())
            .ok_or_else(|| DomainError::NotFound("schedule not found".into()))?;

        if current.revision() != schedule.revision() {
            return Err(DomainError::Conflict(
                "schedule was modified concurrently".into(),
            ));
        }

        let next = schedule.clone().with_revision(schedule.revision() + 1);
        store
            .schedules
            .insert(next.id().to_string(), next.clone());
        Ok(next)
    }

    async fn delete(&self, id: &ScheduleId) -> DomainResult<()> {
        let mut store = self.inner.write().map_err(poisoned)?;
        let removed = store
            .schedules
            .remove(id.as_str())
            .ok_or_else(|| DomainError::NotFound("schedule not found".into()))?;
        store.tokens.remove(removed.edit_token().as_str());
        Ok(())
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let mut store = self.inner.write().map_err(poisoned)?;
        let expired: Vec<(String, String)> = store
            .schedules
            .values()
            .filter(|schedule| schedule.expires_at() < now)
            .map(|schedule| {
                (
                    schedule.id().to_string(),
                    schedule.edit_token().as_str().to_string(),
                )
            })
            .collect();

        for (id, token) in &expired {
            store.schedules.remove(id);
            store.tokens.remove(token);
        }
        Ok(expired.len() as u64)
    }
}

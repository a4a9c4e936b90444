// src/application/services/mod.rs
use chrono::Duration;
use std::sync::Arc;

use crate::{
    application::{
        commands::schedules::ScheduleCommandService,
        error::ApplicationError,
        ports::time::Clock,
        queries::schedules::ScheduleQueryService,
    },
    domain::schedule::{EntropySource, ScheduleRepository},
};

pub struct ApplicationServices {
    pub schedule_commands: Arc<ScheduleCommandService>,
    pub schedule_queries: Arc<ScheduleQueryService>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    clock: Arc<dyn Clock>,
}

impl ApplicationServices {
    pub fn new(
        schedule_repo: Arc<dyn ScheduleRepository>,
        entropy: Arc<dyn EntropySource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let schedule_commands = Arc::new(ScheduleCommandService::new(
            Arc::clone(&schedule_repo),
            Arc::clone(&entropy),
            Arc::clone(&clock),
        ));

        let schedule_queries = Arc::new(ScheduleQueryService::new(
            Arc::clone(&schedule_repo),
            Arc::clone(&clock),
        ));

        Self {
            schedule_commands,
            schedule_queries,
            schedule_repo,
            clock,
        }
    }

    pub fn schedule_repo(&self) -> Arc<dyn ScheduleRepository> {
        Arc::clone(&self.schedule_repo)
    }

    /// Physically drop schedules that expired more than `retention` ago.
    /// Reads and writes never depend on this having run.
    pub async fn purge_expired(
        &self,
        retention: Duration,
    ) -> crate::application::ApplicationResult<u64> {
        let cutoff = self
            .clock
            .now()
            .checked_sub_signed(retention)
            .ok_or_else(|| ApplicationError::validation("retention window is out of range"))?;
        let removed = self.schedule_repo.purge_expired(cutoff).await?;
        if removed > 0 {
            tracing::info!(removed, "purged expired schedules");
        } else {
            tracing::debug!("no expired schedules to purge");
        }
        Ok(removed)
    }
}

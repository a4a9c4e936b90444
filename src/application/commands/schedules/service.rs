// src/application/commands/schedules/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        guards::{ensure_active, ensure_edit_token, parse_edit_token, require_edit_token},
        ports::time::Clock,
    },
    domain::schedule::{EntropySource, Schedule, ScheduleId, ScheduleRepository},
};

pub struct ScheduleCommandService {
    pub(super) repo: Arc<dyn ScheduleRepository>,
    pub(super) entropy: Arc<dyn EntropySource>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ScheduleCommandService {
    pub fn new(
        repo: Arc<dyn ScheduleRepository>,
        entropy: Arc<dyn EntropySource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            entropy,
            clock,
        }
    }

    /// Load a schedule addressed by its public id and check that the
    /// presented token may edit it: 401, 404, 410, then 403.
    pub(super) async fn load_for_edit_by_id(
        &self,
        id: String,
        edit_token: Option<&str>,
    ) -> ApplicationResult<Schedule> {
        let token = require_edit_token(edit_token)?;
        let id = ScheduleId::new(id)?;
        let schedule = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("schedule not found"))?;

        ensure_active(&schedule, self.clock.now())?;
        ensure_edit_token(&schedule, token)?;
        Ok(schedule)
    }

    /// Load a schedule addressed by its secret token. An unknown token is a
    /// failed attempt and maps to 403.
    pub(super) async fn load_for_edit_by_token(
        &self,
        edit_token: &str,
    ) -> ApplicationResult<Schedule> {
        let presented = require_edit_token(Some(edit_token))?;
        let token = parse_edit_token(presented)?;
        let schedule = self
            .repo
            .find_by_edit_token(&token)
            .await?
            .ok_or_else(|| ApplicationError::forbidden("no schedule for this edit token"))?;

        ensure_active(&schedule, self.clock.now())?;
        ensure_edit_token(&schedule, presented)?;
        Ok(schedule)
    }
}

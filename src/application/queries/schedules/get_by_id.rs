use super::ScheduleQueryService;
use crate::{
    application::{
        dto::ScheduleDto,
        error::{ApplicationError, ApplicationResult},
        guards::ensure_active,
    },
    domain::schedule::ScheduleId,
};

pub struct GetScheduleQuery {
    pub id: String,
}

impl ScheduleQueryService {
    pub async fn get_schedule(&self, query: GetScheduleQuery) -> ApplicationResult<ScheduleDto> {
        let id = ScheduleId::new(query.id)?;
        let schedule = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("schedule not found"))?;

        ensure_active(&schedule, self.clock.now())?;
        Ok(schedule.into())
    }
}

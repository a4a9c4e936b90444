use super::ScheduleQueryService;
use crate::application::{
    dto::ScheduleDto,
    error::{ApplicationError, ApplicationResult},
    guards::{ensure_active, ensure_edit_token, parse_edit_token, require_edit_token},
};

pub struct GetScheduleByEditTokenQuery {
    pub edit_token: String,
}

impl ScheduleQueryService {
    /// Edit-link view. The response has the same shape as the public view;
    /// the caller already holds the token.
    pub async fn get_schedule_by_edit_token(
        &self,
        query: GetScheduleByEditTokenQuery,
    ) -> ApplicationResult<ScheduleDto> {
        let presented = require_edit_token(Some(&query.edit_token))?;
        let token = parse_edit_token(presented)?;
        let schedule = self
            .repo
            .find_by_edit_token(&token)
            .await?
            .ok_or_else(|| ApplicationError::forbidden("no schedule for this edit token"))?;

        ensure_active(&schedule, self.clock.now())?;
        ensure_edit_token(&schedule, presented)?;
        Ok(schedule.into())
    }
}

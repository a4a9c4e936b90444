// src/application/commands/schedules/delete.rs
use super::ScheduleCommandService;
use crate::application::error::ApplicationResult;

pub struct DeleteScheduleCommand {
    pub id: String,
    pub edit_token: Option<String>,
}

pub struct DeleteScheduleByTokenCommand {
    pub edit_token: String,
}

impl ScheduleCommandService {
    pub async fn delete_schedule(&self, command: DeleteScheduleCommand) -> ApplicationResult<()> {
        let schedule = self
            .load_for_edit_by_id(command.id, command.edit_token.as_deref())
            .await?;

        self.repo.delete(schedule.id()).await?;
        tracing::info!(schedule_id = %schedule.id(), "schedule deleted");
        Ok(())
    }

    pub async fn delete_schedule_by_token(
        &self,
        command: DeleteScheduleByTokenCommand,
    ) -> ApplicationResult<()> {
        let schedule = self.load_for_edit_by_token(&command.edit_token).await?;

        self.repo.delete(schedule.id()).await?;
        tracing::info!(schedule_id = %schedule.id(), "schedule deleted via edit link");
        Ok(())
    }
}

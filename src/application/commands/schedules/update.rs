// src/application/commands/schedules/update.rs
use super::ScheduleCommandService;
use crate::{
    application::{
        dto::{ScheduleDto, TimeSlotDto},
        error::ApplicationResult,
    },
    domain::schedule::{Schedule, TimeSlot},
};

pub struct UpdateScheduleCommand {
    pub id: String,
    pub edit_token: Option<String>,
    pub time_slots: Vec<TimeSlotDto>,
    pub comment: String,
}

pub struct UpdateScheduleByTokenCommand {
    pub edit_token: String,
    pub time_slots: Vec<TimeSlotDto>,
    pub comment: String,
}

impl ScheduleCommandService {
    pub async fn update_schedule(
        &self,
        command: UpdateScheduleCommand,
    ) -> ApplicationResult<ScheduleDto> {
        let UpdateScheduleCommand {
            id,
            edit_token,
            time_slots,
            comment,
        } = command;

        let schedule = self
            .load_for_edit_by_id(id, edit_token.as_deref())
            .await?;
        self.replace_contents(schedule, time_slots, comment).await
    }

    pub async fn update_schedule_by_token(
        &self,
        command: UpdateScheduleByTokenCommand,
    ) -> ApplicationResult<ScheduleDto> {
        let UpdateScheduleByTokenCommand {
            edit_token,
            time_slots,
            comment,
        } = command;

        let schedule = self.load_for_edit_by_token(&edit_token).await?;
        self.replace_contents(schedule, time_slots, comment).await
    }

    /// Slots are replaced wholesale; a rejected candidate set never reaches
    /// the store.
    async fn replace_contents(
        &self,
        mut schedule: Schedule,
        time_slots: Vec<TimeSlotDto>,
        comment: String,
    ) -> ApplicationResult<ScheduleDto> {
        schedule.replace_time_slots(time_slots.into_iter().map(TimeSlot::from).collect())?;
        schedule.set_comment(comment);

        let stored = self.repo.update(&schedule).await?;
        tracing::info!(
            schedule_id = %stored.id(),
            slots = stored.time_slots().len(),
            revision = stored.revision(),
            "schedule updated"
        );
        Ok(stored.into())
    }
}

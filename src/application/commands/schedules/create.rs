// src/application/commands/schedules/create.rs
use super::ScheduleCommandService;
use crate::{
    application::{
        dto::{CreatedScheduleDto, TimeSlotDto},
        error::ApplicationResult,
    },
    domain::schedule::{Schedule, TimeSlot},
};

pub struct CreateScheduleCommand {
    pub time_slots: Vec<TimeSlotDto>,
    pub comment: String,
}

impl CreateScheduleCommand {
    pub fn builder() -> CreateScheduleCommandBuilder {
        CreateScheduleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateScheduleCommandBuilder {
    time_slots: Vec<TimeSlotDto>,
    comment: String,
}

impl CreateScheduleCommandBuilder {
    pub fn slot(mut self, slot: impl Into<TimeSlotDto>) -> Self {
        self.time_slots.push(slot.into());
        self
    }

    pub fn slots(mut self, slots: impl IntoIterator<Item = TimeSlotDto>) -> Self {
        self.time_slots.extend(slots);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn build(self) -> CreateScheduleCommand {
        CreateScheduleCommand {
            time_slots: self.time_slots,
            comment: self.comment,
        }
    }
}

impl ScheduleCommandService {
    pub async fn create_schedule(
        &self,
        command: CreateScheduleCommand,
    ) -> ApplicationResult<CreatedScheduleDto> {
        let now = self.clock.now();
        let mut schedule = Schedule::new(self.entropy.as_ref(), now)?;

        schedule.replace_time_slots(command.time_slots.into_iter().map(TimeSlot::from).collect())?;
        schedule.set_comment(command.comment);

        self.repo.create(&schedule).await?;
        tracing::info!(
            schedule_id = %schedule.id(),
            slots = schedule.time_slots().len(),
            expires_at = %schedule.expires_at(),
            "schedule created"
        );

        Ok(schedule.into())
    }
}

// src/infrastructure/seed.rs
//! Sample schedules for local development.
use crate::application::{
    ApplicationResult,
    commands::schedules::{CreateScheduleCommand, ScheduleCommandService},
    dto::{CreatedScheduleDto, TimeSlotDto},
};
use crate::domain::schedule::TimeSlot;
use chrono::{DateTime, Duration, Utc};

/// Commands for the sample schedules, anchored at `now`.
pub fn sample_commands(now: DateTime<Utc>) -> Vec<CreateScheduleCommand> {
    let today = CreateScheduleCommand::builder()
        .slot(TimeSlotDto {
            start_time: now + Duration::hours(1),
            end_time: now + Duration::hours(2),
            available: true,
        })
        .slot(TimeSlotDto {
            start_time: now + Duration::hours(3),
            end_time: now + Duration::hours(4),
            available: false,
        })
        .comment("サンプルスケジュール1")
        .build();

    let tomorrow_start = now + Duration::hours(24);
    let tomorrow = CreateScheduleCommand::builder()
        .slots(
            TimeSlot::split_range(
                tomorrow_start,
                tomorrow_start + Duration::hours(3),
                Duration::hours(1),
                true,
            )
            .iter()
            .map(TimeSlotDto::from),
        )
        .comment("明日の予定")
        .build();

    vec![today, tomorrow]
}

/// Creates the sample schedules through the regular command path, so each
/// gets a fresh id and edit token.
pub async fn seed_schedules(
    commands: &ScheduleCommandService,
    now: DateTime<Utc>,
) -> ApplicationResult<Vec<CreatedScheduleDto>> {
    let mut created = Vec::new();
    for command in sample_commands(now) {
        created.push(commands.create_schedule(command).await?);
    }
    tracing::info!(count = created.len(), "seeded sample schedules");
    Ok(created)
}

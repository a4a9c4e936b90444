use crate::domain::schedule::{Schedule, TimeSlot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotDto {
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub start_time: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub available: bool,
}

impl From<&TimeSlot> for TimeSlotDto {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            start_time: slot.start_time,
            end_time: slot.end_time,
            available: slot.available,
        }
    }
}

impl From<TimeSlotDto> for TimeSlot {
    fn from(dto: TimeSlotDto) -> Self {
        Self::new(dto.start_time, dto.end_time, dto.available)
    }
}

/// Public view of a schedule. Never carries the edit token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: String,
    pub time_slots: Vec<TimeSlotDto>,
    pub comment: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub expires_at: DateTime<Utc>,
}

impl From<&Schedule> for ScheduleDto {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id().to_string(),
            time_slots: schedule.time_slots().iter().map(TimeSlotDto::from).collect(),
            comment: schedule.comment().to_string(),
            created_at: schedule.created_at(),
            expires_at: schedule.expires_at(),
        }
    }
}

impl From<Schedule> for ScheduleDto {
    fn from(schedule: Schedule) -> Self {
        Self::from(&schedule)
    }
}

/// Returned once, to the organizer who created the schedule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedScheduleDto {
    pub id: String,
    pub edit_token: String,
    pub time_slots: Vec<TimeSlotDto>,
    pub comment: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub expires_at: DateTime<Utc>,
}

impl From<Schedule> for CreatedScheduleDto {
    fn from(schedule: Schedule) -> Self {
        let view = ScheduleDto::from(&schedule);
        Self {
            id: view.id,
            edit_token: schedule.edit_token().as_str().to_string(),
            time_slots: view.time_slots,
            comment: view.comment,
            created_at: view.created_at,
            expires_at: view.expires_at,
        }
    }
}

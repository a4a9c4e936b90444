// src/infrastructure/repositories/records.rs
//! Serialized shapes shared by the document-style stores.
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::schedule::{EditToken, Schedule, ScheduleId, TimeSlot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotRecord {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
}

impl From<&TimeSlot> for TimeSlotRecord {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            start_time: slot.start_time,
            end_time: slot.end_time,
            available: slot.available,
        }
    }
}

impl From<TimeSlotRecord> for TimeSlot {
    fn from(record: TimeSlotRecord) -> Self {
        Self::new(record.start_time, record.end_time, record.available)
    }
}

pub fn slot_records(schedule: &Schedule) -> Vec<TimeSlotRecord> {
    schedule.time_slots().iter().map(TimeSlotRecord::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub id: String,
    pub edit_token: String,
    pub time_slots: Vec<TimeSlotRecord>,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revision: i64,
}

impl From<&Schedule> for ScheduleDocument {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id().to_string(),
            edit_token: schedule.edit_token().as_str().to_string(),
            time_slots: slot_records(schedule),
            comment: schedule.comment().to_string(),
            created_at: schedule.created_at(),
            expires_at: schedule.expires_at(),
            revision: schedule.revision(),
        }
    }
}

impl TryFrom<ScheduleDocument> for Schedule {
    type Error = DomainError;

    fn try_from(doc: ScheduleDocument) -> Result<Self, Self::Error> {
        Ok(Schedule::restore(
            ScheduleId::new(doc.id)?,
            EditToken::new(doc.edit_token)?,
            doc.time_slots.into_iter().map(TimeSlot::from).collect(),
            doc.comment,
            doc.created_at,
            doc.expires_at,
            doc.revision,
        ))
    }
}

impl ScheduleDocument {
    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(|err| DomainError::Persistence(err.to_string()))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|err| DomainError::Persistence(err.to_string()))
    }
}

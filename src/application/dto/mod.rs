pub mod schedules;
pub mod serde_time;

pub use schedules::{CreatedScheduleDto, ScheduleDto, TimeSlotDto};

pub mod entity;
pub mod repository;
pub mod secrets;
pub mod time_slot;
pub mod value_objects;

pub use entity::{SCHEDULE_TTL_DAYS, Schedule, ScheduleState, schedule_ttl};
pub use repository::ScheduleRepository;
pub use secrets::EntropySource;
pub use time_slot::TimeSlot;
pub use value_objects::{EditToken, ScheduleId};

// src/application/commands/schedules/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateScheduleCommand, CreateScheduleCommandBuilder};
pub use delete::{DeleteScheduleByTokenCommand, DeleteScheduleCommand};
pub use service::ScheduleCommandService;
pub use update::{UpdateScheduleByTokenCommand, UpdateScheduleCommand};

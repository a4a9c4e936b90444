// src/infrastructure/repositories/mod.rs
pub mod error;
mod memory_schedule;
mod postgres_schedule;
pub mod records;
mod redis_schedule;

pub use memory_schedule::InMemoryScheduleRepository;
pub use postgres_schedule::PostgresScheduleRepository;
pub use redis_schedule::RedisScheduleRepository;

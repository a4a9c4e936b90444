// src/infrastructure/storage.rs
use crate::config::{AppConfig, ConfigError, StorageBackend};
use crate::domain::errors::DomainError;
use crate::domain::schedule::ScheduleRepository;
use crate::infrastructure::{
    database,
    repositories::{InMemoryScheduleRepository, PostgresScheduleRepository, RedisScheduleRepository},
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("invalid retention window: {0}")]
    Retention(#[from] chrono::OutOfRangeError),
}

/// Connects the repository selected by `STORAGE_BACKEND`. Postgres runs
/// pending migrations before the repository is handed out.
pub async fn connect_schedule_repository(
    config: &AppConfig,
) -> Result<Arc<dyn ScheduleRepository>, StorageError> {
    match config.storage_backend() {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; schedules are lost on restart");
            Ok(Arc::new(InMemoryScheduleRepository::new()))
        }
        StorageBackend::Postgres => {
            let url = config
                .database_url()
                .ok_or(ConfigError::Missing("DATABASE_URL"))?;
            let pool = database::init_pool(url).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("connected to postgres");
            Ok(Arc::new(PostgresScheduleRepository::new(Arc::new(pool))))
        }
        StorageBackend::Redis => {
            let url = config.redis_url().ok_or(ConfigError::Missing("REDIS_URL"))?;
            let retention = chrono::Duration::from_std(config.expired_retention())?;
            let repo = RedisScheduleRepository::from_url(url, retention)?;
            tracing::info!("using redis storage");
            Ok(Arc::new(repo))
        }
    }
}

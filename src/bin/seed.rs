// src/bin/seed.rs
use anyhow::Result;
use kareru::application::{ports::time::Clock, services::ApplicationServices};
use kareru::config::AppConfig;
use kareru::domain::schedule::EntropySource;
use kareru::infrastructure::{security::entropy::OsEntropySource, seed, storage, time::SystemClock};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let repo = storage::connect_schedule_repository(&config).await?;
    let entropy: Arc<dyn EntropySource> = Arc::new(OsEntropySource::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = ApplicationServices::new(repo, entropy, Arc::clone(&clock));

    let created = seed::seed_schedules(&services.schedule_commands, clock.now()).await?;
    for schedule in created {
        println!(
            "{}  view: /api/v1/schedules/{}  edit: /api/v1/schedules/edit/{}",
            schedule.comment, schedule.id, schedule.edit_token
        );
    }
    Ok(())
}

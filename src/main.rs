use anyhow::Result;
use kareru::application::{ports::time::Clock, services::ApplicationServices};
use kareru::config::AppConfig;
use kareru::domain::schedule::EntropySource;
use kareru::infrastructure::{
    security::entropy::OsEntropySource, storage::connect_schedule_repository, time::SystemClock,
};
use kareru::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let schedule_repo = connect_schedule_repository(&config).await?;
    let entropy: Arc<dyn EntropySource> = Arc::new(OsEntropySource::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        schedule_repo,
        Arc::clone(&entropy),
        Arc::clone(&clock),
    ));

    if let Some(interval) = config.purge_interval() {
        let retention = chrono::Duration::from_std(config.expired_retention())?;
        spawn_sweeper(Arc::clone(&services), interval, retention);
    }

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(
        state,
        RouterOptions {
            rate_limit: config.rate_limit_enabled(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    );
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(backend = ?config.storage_backend(), "listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn spawn_sweeper(services: Arc<ApplicationServices>, every: Duration, retention: chrono::Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // the first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = services.purge_expired(retention).await {
                tracing::warn!(error = %err, "expired schedule purge failed");
            }
        }
    });
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

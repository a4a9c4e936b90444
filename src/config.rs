// src/config.rs
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::Invalid(format!(
                "STORAGE_BACKEND must be memory, postgres or redis (got {other:?})"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    storage_backend: StorageBackend,
    database_url: Option<String>,
    redis_url: Option<String>,
    allowed_origins: Vec<String>,
    purge_interval: Option<Duration>,
    expired_retention: Duration,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_purge_interval_secs() -> u64 {
    3600
}

fn default_retention_hours() -> u64 {
    24 * 7
}

/// Upper bound for `EXPIRED_RETENTION_HOURS` (five years).
pub const MAX_RETENTION_HOURS: u64 = 24 * 365 * 5;

fn parse_number(key: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer"))),
    }
}

fn parse_flag(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::trim).map(str::to_ascii_lowercase) {
        None => Ok(default),
        Some(value) => match value.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(format!("{key} must be a boolean"))),
        },
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Optional keys fall
    /// back to defaults; keys required by the chosen backend are checked.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr = non_blank("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        let storage_backend = match non_blank("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::Memory,
        };

        let database_url = non_blank("DATABASE_URL");
        let redis_url = non_blank("REDIS_URL");
        match storage_backend {
            StorageBackend::Postgres if database_url.is_none() => {
                return Err(ConfigError::Missing("DATABASE_URL"));
            }
            StorageBackend::Redis if redis_url.is_none() => {
                return Err(ConfigError::Missing("REDIS_URL"));
            }
            _ => {}
        }

        let allowed_origins = non_blank("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["*".to_string()]);

        let purge_secs = parse_number(
            "PURGE_INTERVAL_SECS",
            non_blank("PURGE_INTERVAL_SECS"),
            default_purge_interval_secs(),
        )?;
        let retention_hours = parse_number(
            "EXPIRED_RETENTION_HOURS",
            non_blank("EXPIRED_RETENTION_HOURS"),
            default_retention_hours(),
        )?;
        if retention_hours > MAX_RETENTION_HOURS {
            return Err(ConfigError::Invalid(format!(
                "EXPIRED_RETENTION_HOURS must be at most {MAX_RETENTION_HOURS}"
            )));
        }
        let expired_retention = retention_hours
            .checked_mul(3600)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                ConfigError::Invalid("EXPIRED_RETENTION_HOURS is out of range".into())
            })?;
        let rate_limit_enabled =
            parse_flag("RATE_LIMIT_ENABLED", non_blank("RATE_LIMIT_ENABLED"), true)?;

        Ok(Self {
            listen_addr,
            storage_backend,
            database_url,
            redis_url,
            allowed_origins,
            purge_interval: (purge_secs > 0).then(|| Duration::from_secs(purge_secs)),
            expired_retention,
            rate_limit_enabled,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    /// Allowed CORS origins; a lone `*` means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// `None` when the sweeper is disabled.
    pub fn purge_interval(&self) -> Option<Duration> {
        self.purge_interval
    }

    pub fn expired_retention(&self) -> Duration {
        self.expired_retention
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}

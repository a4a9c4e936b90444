use crate::domain::errors::DomainError;

const CNT_SCHEDULE_PKEY: &str = "schedules_pkey";
const CNT_SCHEDULE_EDIT_TOKEN: &str = "schedules_edit_token_key";
const CNT_SCHEDULE_EXPIRY_CHECK: &str = "schedules_expiry_after_creation_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_SCHEDULE_PKEY => DomainError::Conflict("schedule id already exists".into()),
                    CNT_SCHEDULE_EDIT_TOKEN => {
                        DomainError::Conflict("edit token already in use".into())
                    }
                    CNT_SCHEDULE_EXPIRY_CHECK => {
                        DomainError::Validation("expiry must come after creation".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_redis(err: redis::RedisError) -> DomainError {
    DomainError::Persistence(format!("redis: {err}"))
}

// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::schedules::create_schedule,
        crate::presentation::http::controllers::schedules::get_schedule,
        crate::presentation::http::controllers::schedules::update_schedule,
        crate::presentation::http::controllers::schedules::delete_schedule,
        crate::presentation::http::controllers::schedules::get_schedule_by_edit_token,
        crate::presentation::http::controllers::schedules::update_schedule_by_edit_token,
        crate::presentation::http::controllers::schedules::delete_schedule_by_edit_token,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::schedules::CreateScheduleRequest,
            crate::presentation::http::controllers::schedules::UpdateScheduleRequest,
            crate::presentation::http::controllers::schedules::ReplaceScheduleRequest,
            crate::presentation::http::controllers::schedules::DeleteScheduleRequest,
            crate::application::dto::TimeSlotDto,
            crate::application::dto::ScheduleDto,
            crate::application::dto::CreatedScheduleDto
        )
    ),
    tags(
        (name = "Schedules", description = "Public schedule links and token-in-body edits"),
        (name = "Edit links", description = "Schedules addressed by their secret edit token"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Kareru API",
        description = "Anonymous schedule sharing backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI at `/docs` (which also serves `/openapi.json`) and Redoc at
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Where the snapshot binary writes, from `OPENAPI_SNAPSHOT_PATH`.
pub fn snapshot_path_from_env() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

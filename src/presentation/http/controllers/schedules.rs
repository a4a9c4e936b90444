// src/presentation/http/controllers/schedules.rs
use crate::application::{
    commands::schedules::{
        CreateScheduleCommand, DeleteScheduleByTokenCommand, DeleteScheduleCommand,
        UpdateScheduleByTokenCommand, UpdateScheduleCommand,
    },
    dto::{CreatedScheduleDto, ScheduleDto, TimeSlotDto},
    queries::schedules::{GetScheduleByEditTokenQuery, GetScheduleQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, parse_optional_body};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    #[serde(default)]
    pub time_slots: Vec<TimeSlotDto>,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    #[serde(default)]
    pub edit_token: Option<String>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotDto>,
    #[serde(default)]
    pub comment: String,
}

/// Body for updates addressed through the edit link; the token is in the path.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceScheduleRequest {
    #[serde(default)]
    pub time_slots: Vec<TimeSlotDto>,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteScheduleRequest {
    #[serde(default)]
    pub edit_token: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 201, description = "Schedule created. The edit token is only returned here.", body = CreatedScheduleDto),
        (status = 400, description = "Invalid or overlapping time slots.", body = ErrorResponse)
    ),
    tag = "Schedules"
)]
pub async fn create_schedule(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateScheduleRequest>,
) -> HttpResult<(StatusCode, Json<CreatedScheduleDto>)> {
    let command = CreateScheduleCommand::builder()
        .slots(payload.time_slots)
        .comment(payload.comment)
        .build();

    let created = state
        .services
        .schedule_commands
        .create_schedule(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/schedules/{id}",
    params(("id" = String, Path, description = "Public schedule id")),
    responses(
        (status = 200, description = "Public view of the schedule.", body = ScheduleDto),
        (status = 404, description = "No schedule with this id.", body = ErrorResponse),
        (status = 410, description = "Schedule has expired.", body = ErrorResponse)
    ),
    tag = "Schedules"
)]
pub async fn get_schedule(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ScheduleDto>> {
    state
        .services
        .schedule_queries
        .get_schedule(GetScheduleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/schedules/{id}",
    params(("id" = String, Path, description = "Public schedule id")),
    request_body = UpdateScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated.", body = ScheduleDto),
        (status = 400, description = "Invalid or overlapping time slots.", body = ErrorResponse),
        (status = 401, description = "Edit token missing.", body = ErrorResponse),
        (status = 403, description = "Edit token does not match.", body = ErrorResponse),
        (status = 404, description = "No schedule with this id.", body = ErrorResponse),
        (status = 409, description = "Schedule was modified concurrently.", body = ErrorResponse),
        (status = 410, description = "Schedule has expired.", body = ErrorResponse)
    ),
    tag = "Schedules"
)]
pub async fn update_schedule(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateScheduleRequest>,
) -> HttpResult<Json<ScheduleDto>> {
    let command = UpdateScheduleCommand {
        id,
        edit_token: payload.edit_token,
        time_slots: payload.time_slots,
        comment: payload.comment,
    };

    state
        .services
        .schedule_commands
        .update_schedule(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/schedules/{id}",
    params(("id" = String, Path, description = "Public schedule id")),
    request_body = DeleteScheduleRequest,
    responses(
        (status = 204, description = "Schedule deleted."),
        (status = 401, description = "Edit token missing.", body = ErrorResponse),
        (status = 403, description = "Edit token does not match.", body = ErrorResponse),
        (status = 404, description = "No schedule with this id.", body = ErrorResponse),
        (status = 410, description = "Schedule has expired.", body = ErrorResponse)
    ),
    tag = "Schedules"
)]
pub async fn delete_schedule(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    body: Bytes,
) -> HttpResult<StatusCode> {
    // clients commonly send DELETE without a body; that is a missing token
    let payload: DeleteScheduleRequest = parse_optional_body(&body)?;

    state
        .services
        .schedule_commands
        .delete_schedule(DeleteScheduleCommand {
            id,
            edit_token: payload.edit_token,
        })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/schedules/edit/{token}",
    params(("token" = String, Path, description = "Secret edit token")),
    responses(
        (status = 200, description = "Schedule addressed by its edit link.", body = ScheduleDto),
        (status = 403, description = "No schedule for this edit token.", body = ErrorResponse),
        (status = 410, description = "Schedule has expired.", body = ErrorResponse)
    ),
    tag = "Edit links"
)]
pub async fn get_schedule_by_edit_token(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Json<ScheduleDto>> {
    state
        .services
        .schedule_queries
        .get_schedule_by_edit_token(GetScheduleByEditTokenQuery { edit_token: token })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/schedules/edit/{token}",
    params(("token" = String, Path, description = "Secret edit token")),
    request_body = ReplaceScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated.", body = ScheduleDto),
        (status = 400, description = "Invalid or overlapping time slots.", body = ErrorResponse),
        (status = 403, description = "No schedule for this edit token.", body = ErrorResponse),
        (status = 409, description = "Schedule was modified concurrently.", body = ErrorResponse),
        (status = 410, description = "Schedule has expired.", body = ErrorResponse)
    ),
    tag = "Edit links"
)]
pub async fn update_schedule_by_edit_token(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
    ApiJson(payload): ApiJson<ReplaceScheduleRequest>,
) -> HttpResult<Json<ScheduleDto>> {
    let command = UpdateScheduleByTokenCommand {
        edit_token: token,
        time_slots: payload.time_slots,
        comment: payload.comment,
    };

    state
        .services
        .schedule_commands
        .update_schedule_by_token(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/schedules/edit/{token}",
    params(("token" = String, Path, description = "Secret edit token")),
    responses(
        (status = 204, description = "Schedule deleted."),
        (status = 403, description = "No schedule for this edit token.", body = ErrorResponse),
        (status = 410, description = "Schedule has expired.", body = ErrorResponse)
    ),
    tag = "Edit links"
)]
pub async fn delete_schedule_by_edit_token(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .schedule_commands
        .delete_schedule_by_token(DeleteScheduleByTokenCommand { edit_token: token })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

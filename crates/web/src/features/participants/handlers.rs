use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::participant::{
        CreateParticipantRequest, ParticipantHistoryResponse, ParticipantResponse,
        ParticipantSearch, RecordResultRequest, UpdateParticipantRequest,
    },
    models::RaceResult,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participants",
    params(ParticipantSearch),
    responses(
        (status = 200, description = "Participants in registration order", body = Vec<ParticipantResponse>)
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Query(search): Query<ParticipantSearch>,
) -> Result<Response, WebError> {
    let participants = services::list_participants(&db, search.q.as_deref())?;

    let response: Vec<ParticipantResponse> = participants
        .into_iter()
        .map(ParticipantResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Participant found", body = ParticipantResponse),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let participant = services::get_participant(&db, id)?;

    Ok(Json(ParticipantResponse::from(participant)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants",
    request_body = CreateParticipantRequest,
    responses(
        (status = 201, description = "Participant created successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "participants"
)]
pub async fn create_participant(
    State(db): State<Database>,
    Json(req): Json<CreateParticipantRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let participant = services::create_participant(&db, &req)?;

    Ok((StatusCode::CREATED, Json(ParticipantResponse::from(participant))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = UpdateParticipantRequest,
    responses(
        (status = 200, description = "Participant updated successfully", body = ParticipantResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn update_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateParticipantRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_participant(&db, id, &update_req)?;

    Ok(Json(ParticipantResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 204, description = "Participant and their results deleted"),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn delete_participant(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_participant(&db, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/participants/{id}/results",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    request_body = RecordResultRequest,
    responses(
        (status = 200, description = "Result stored with freshly computed points", body = RaceResult),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Participant or result not found")
    ),
    tag = "participants"
)]
pub async fn record_result(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::record_result(&db, id, &req)?;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/participants/{id}/results/{result_id}",
    params(
        ("id" = Uuid, Path, description = "Participant ID"),
        ("result_id" = Uuid, Path, description = "Result ID")
    ),
    responses(
        (status = 204, description = "Result deleted"),
        (status = 404, description = "Participant or result not found")
    ),
    tag = "participants"
)]
pub async fn delete_result(
    State(db): State<Database>,
    Path((id, result_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::delete_result(&db, id, result_id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/participants/{id}/history",
    params(
        ("id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Plain-text performance history", body = ParticipantHistoryResponse),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_history(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let history = services::get_history(&db, id)?;

    Ok(Json(history).into_response())
}

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scoring::{
        RecalculateResponse, ScoreChartQuery, ScoreChartRow, ScoreRequest, ScoreResponse,
        ScoringConfig, ScoringTableResponse,
    },
    error::StorageError,
    models::Distance,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scoring",
    responses(
        (status = 200, description = "Active scoring table", body = ScoringTableResponse)
    ),
    tag = "scoring"
)]
pub async fn get_scoring_table(State(db): State<Database>) -> Result<Response, WebError> {
    let response = services::get_scoring_table(&db)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/scoring",
    request_body = ScoringConfig,
    responses(
        (status = 200, description = "Table replaced and all results rescored", body = RecalculateResponse),
        (status = 400, description = "Invalid scoring configuration")
    ),
    tag = "scoring"
)]
pub async fn replace_scoring_table(
    State(db): State<Database>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, WebError> {
    let config: ScoringConfig = serde_json::from_value(body).map_err(StorageError::from)?;

    let response = services::replace_scoring_table(&db, &config)?;

    tracing::info!(
        results = response.results_recalculated,
        "scoring table replaced"
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scoring/score",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Points for the given clock", body = ScoreResponse),
        (status = 400, description = "Invalid request")
    ),
    tag = "scoring"
)]
pub async fn score_time(
    State(db): State<Database>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let response = services::score_time(&db, &payload.distance, &payload.time)?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scoring/chart/{distance}",
    params(
        ("distance" = String, Path, description = "Distance name, e.g. 500m"),
        ScoreChartQuery
    ),
    responses(
        (status = 200, description = "Evenly spaced clocks from gold to base with their points", body = Vec<ScoreChartRow>),
        (status = 400, description = "Unknown distance"),
        (status = 404, description = "Distance has no reference times")
    ),
    tag = "scoring"
)]
pub async fn get_score_chart(
    State(db): State<Database>,
    Path(distance): Path<String>,
    Query(query): Query<ScoreChartQuery>,
) -> Result<Response, WebError> {
    query.validate()?;
    let distance: Distance = distance.parse()?;

    let chart = services::get_score_chart(&db, distance, query.steps)?;

    Ok(Json(chart).into_response())
}

#[utoipa::path(
    post,
    path = "/api/scoring/recalculate",
    responses(
        (status = 200, description = "All stored results rescored", body = RecalculateResponse)
    ),
    tag = "scoring"
)]
pub async fn recalculate_all(State(db): State<Database>) -> Result<Response, WebError> {
    let response = services::recalculate_all(&db)?;

    Ok(Json(response).into_response())
}

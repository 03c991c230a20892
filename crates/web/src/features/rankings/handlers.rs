use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        ranking::{AffiliationStanding, LeaderboardEntry, LeaderboardQuery, OverallEntry},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings/individual",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Individual leaderboard retrieved successfully", body = PaginatedResponse<LeaderboardEntry>),
        (status = 400, description = "Invalid query parameters, or a time order without a distance")
    ),
    tag = "rankings"
)]
pub async fn get_individual_ranking(
    State(db): State<Database>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    let pagination = query.pagination();
    pagination.validate().map_err(WebError::BadRequest)?;

    let (entries, total_items) = services::get_individual_ranking(&db, &query)?;

    let response = PaginatedResponse::new(
        entries,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rankings/overall",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Overall ranking by summed best points per distance", body = PaginatedResponse<OverallEntry>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "rankings"
)]
pub async fn get_overall_ranking(
    State(db): State<Database>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    let pagination = query.pagination();
    pagination.validate().map_err(WebError::BadRequest)?;

    let (entries, total_items) = services::get_overall_ranking(&db, &query)?;

    let response = PaginatedResponse::new(
        entries,
        pagination.page,
        pagination.page_size,
        total_items,
    );

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rankings/affiliations",
    responses(
        (status = 200, description = "Affiliations ranked by total member points", body = Vec<AffiliationStanding>)
    ),
    tag = "rankings"
)]
pub async fn get_affiliation_standings(State(db): State<Database>) -> Result<Response, WebError> {
    let standings = services::get_affiliation_standings(&db)?;

    Ok(Json(standings).into_response())
}

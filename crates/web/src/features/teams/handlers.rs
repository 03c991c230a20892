use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{TeamAssemblyResponse, TeamQuery},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    params(TeamQuery),
    responses(
        (status = 200, description = "Squads per affiliation under the gender quota", body = TeamAssemblyResponse),
        (status = 400, description = "Invalid quota or criterion")
    ),
    tag = "teams"
)]
pub async fn get_teams(
    State(db): State<Database>,
    Query(query): Query<TeamQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let response = services::get_teams(&db, &query)?;

    Ok(Json(response).into_response())
}

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use importer::RosterFile;
use storage::{Database, dto::participant::ImportSummary};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/roster/import",
    request_body = RosterFile,
    responses(
        (status = 200, description = "Roster imported; points recomputed", body = ImportSummary),
        (status = 400, description = "Roster failed validation"),
        (status = 409, description = "Roster repeats a participant id")
    ),
    tag = "roster"
)]
pub async fn import_roster(
    State(db): State<Database>,
    Json(roster): Json<RosterFile>,
) -> Result<Response, WebError> {
    let summary = services::import_roster(&db, &roster)?;

    tracing::info!(
        created = summary.created,
        updated = summary.updated,
        "roster imported"
    );

    Ok(Json(summary).into_response())
}

#[utoipa::path(
    get,
    path = "/api/roster/export",
    responses(
        (status = 200, description = "Every participant with results and current points", body = RosterFile)
    ),
    tag = "roster"
)]
pub async fn export_roster(State(db): State<Database>) -> Result<Response, WebError> {
    let roster = services::export_roster(&db)?;

    Ok(Json(roster).into_response())
}

use axum::Router;
use storage::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::features::{participants, rankings, roster, scoring, teams};

pub fn router(db: Database) -> Router {
    Router::new()
        .nest("/api/participants", participants::routes::routes())
        .nest("/api/scoring", scoring::routes::routes())
        .nest("/api/rankings", rankings::routes::routes())
        .nest("/api/teams", teams::routes::routes())
        .nest("/api/roster", roster::routes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

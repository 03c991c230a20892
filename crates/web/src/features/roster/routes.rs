use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{export_roster, import_roster};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/import", post(import_roster))
        .route("/export", get(export_roster))
}

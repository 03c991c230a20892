use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_affiliation_standings, get_individual_ranking, get_overall_ranking};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/individual", get(get_individual_ranking))
        .route("/overall", get(get_overall_ranking))
        .route("/affiliations", get(get_affiliation_standings))
}

use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    get_score_chart, get_scoring_table, recalculate_all, replace_scoring_table, score_time,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_scoring_table).put(replace_scoring_table))
        .route("/score", post(score_time))
        .route("/chart/:distance", get(get_score_chart))
        .route("/recalculate", post(recalculate_all))
}

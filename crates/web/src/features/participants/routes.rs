use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    create_participant, delete_participant, delete_result, get_history, get_participant,
    list_participants, record_result, update_participant,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_participants).post(create_participant))
        .route(
            "/:id",
            get(get_participant)
                .put(update_participant)
                .delete(delete_participant),
        )
        .route("/:id/history", get(get_history))
        .route("/:id/results", post(record_result))
        .route("/:id/results/:result_id", delete(delete_result))
}

use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{create_boxer, delete_boxer, get_boxer, get_boxer_by_name};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_boxer))
        .route("/:id", get(get_boxer).delete(delete_boxer))
        .route("/by-name/:name", get(get_boxer_by_name))
}

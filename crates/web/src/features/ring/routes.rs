use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{clear_ring, enter_ring, fight, get_ring};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_ring).delete(clear_ring))
        .route("/enter", post(enter_ring))
        .route("/fight", post(fight))
}

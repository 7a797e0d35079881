use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod features;
pub mod state;

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::boxers::handlers::create_boxer,
        features::boxers::handlers::get_boxer,
        features::boxers::handlers::get_boxer_by_name,
        features::boxers::handlers::delete_boxer,
        features::leaderboard::handlers::get_leaderboard,
        features::ring::handlers::get_ring,
        features::ring::handlers::enter_ring,
        features::ring::handlers::fight,
        features::ring::handlers::clear_ring,
    ),
    components(
        schemas(
            storage::dto::boxer::CreateBoxerRequest,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::models::Boxer,
            storage::models::WeightClass,
            features::ring::handlers::EnterRingRequest,
            features::ring::handlers::RingResponse,
            features::ring::handlers::FightResponse,
        )
    ),
    tags(
        (name = "boxers", description = "Boxer registry"),
        (name = "leaderboard", description = "Boxer rankings"),
        (name = "ring", description = "Ring staging and fights"),
    )
)]
pub struct ApiDoc;

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .nest("/boxers", features::boxers::routes::routes())
        .nest("/leaderboard", features::leaderboard::routes::routes())
        .nest("/ring", features::ring::routes::routes());

    Router::new()
        .nest("/api", api)
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use storage::models::Boxer;
use utoipa::ToSchema;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, ToSchema)]
pub struct EnterRingRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RingResponse {
    pub occupants: Vec<Boxer>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FightResponse {
    pub winner: String,
}

#[utoipa::path(
    get,
    path = "/api/ring",
    responses(
        (status = 200, description = "Boxers currently in the ring", body = RingResponse)
    ),
    tag = "ring"
)]
pub async fn get_ring(State(state): State<AppState>) -> Result<Response, WebError> {
    let occupants = services::occupants(&state.ring).await;

    Ok(Json(RingResponse { occupants }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/ring/enter",
    request_body = EnterRingRequest,
    responses(
        (status = 200, description = "Boxer entered the ring", body = RingResponse),
        (status = 400, description = "Malformed body or missing boxer name"),
        (status = 404, description = "Boxer not found"),
        (status = 409, description = "Ring is full")
    ),
    tag = "ring"
)]
pub async fn enter_ring(
    State(state): State<AppState>,
    payload: Result<Json<EnterRingRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    if req.name.trim().is_empty() {
        return Err(WebError::BadRequest("name is required".to_string()));
    }

    let occupants = services::enter_ring(state.db.pool(), &state.ring, &req.name).await?;

    Ok(Json(RingResponse { occupants }).into_response())
}

#[utoipa::path(
    post,
    path = "/api/ring/fight",
    responses(
        (status = 200, description = "Fight resolved", body = FightResponse),
        (status = 409, description = "Fewer than two boxers in the ring"),
        (status = 502, description = "Random source returned an error or an unusable value"),
        (status = 504, description = "Random source timed out")
    ),
    tag = "ring"
)]
pub async fn fight(State(state): State<AppState>) -> Result<Response, WebError> {
    let winner = services::fight(state.db.pool(), &state.ring, state.random.as_ref()).await?;

    Ok(Json(FightResponse { winner }).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/ring",
    responses(
        (status = 204, description = "Ring cleared")
    ),
    tag = "ring"
)]
pub async fn clear_ring(State(state): State<AppState>) -> Result<Response, WebError> {
    services::clear_ring(&state.ring).await;

    Ok(StatusCode::NO_CONTENT.into_response())
}

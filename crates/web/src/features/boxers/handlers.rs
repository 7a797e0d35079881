use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{dto::boxer::CreateBoxerRequest, models::Boxer};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/boxers",
    request_body = CreateBoxerRequest,
    responses(
        (status = 201, description = "Boxer created successfully", body = Boxer),
        (status = 400, description = "Malformed body or attribute out of bounds"),
        (status = 409, description = "A boxer with this name already exists")
    ),
    tag = "boxers"
)]
pub async fn create_boxer(
    State(state): State<AppState>,
    payload: Result<Json<CreateBoxerRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    let boxer = services::create_boxer(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(boxer)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/boxers/{id}",
    params(
        ("id" = i64, Path, description = "Boxer id")
    ),
    responses(
        (status = 200, description = "Boxer found", body = Boxer),
        (status = 404, description = "Boxer not found")
    ),
    tag = "boxers"
)]
pub async fn get_boxer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let boxer = services::get_boxer(state.db.pool(), id).await?;

    Ok(Json(boxer).into_response())
}

#[utoipa::path(
    get,
    path = "/api/boxers/by-name/{name}",
    params(
        ("name" = String, Path, description = "Boxer name")
    ),
    responses(
        (status = 200, description = "Boxer found", body = Boxer),
        (status = 404, description = "Boxer not found")
    ),
    tag = "boxers"
)]
pub async fn get_boxer_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, WebError> {
    let boxer = services::get_boxer_by_name(state.db.pool(), &name).await?;

    Ok(Json(boxer).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/boxers/{id}",
    params(
        ("id" = i64, Path, description = "Boxer id")
    ),
    responses(
        (status = 204, description = "Boxer deleted successfully"),
        (status = 404, description = "Boxer not found")
    ),
    tag = "boxers"
)]
pub async fn delete_boxer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_boxer(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::Team;
use crate::routes::AppState;

// Query parameters for searching teams
#[derive(Deserialize)]
pub struct SearchTeamsQuery {
    nombre: String,
}

// GET /equipos - List all teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state.service.list_all().await?;

    Ok(Json(teams))
}

// GET /equipos/:id - Get a team by ID
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Team>, ApiError> {
    let team = state
        .service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("No se encontró el equipo con id {}", id)))?;

    Ok(Json(team))
}

// GET /equipos/buscar?nombre=Real - Search teams by name fragment
pub async fn search_teams(
    State(state): State<AppState>,
    Query(params): Query<SearchTeamsQuery>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state.service.search_by_name(&params.nombre).await?;

    Ok(Json(teams))
}

// POST /equipos - Create a team
pub async fn create_team(
    State(state): State<AppState>,
    Json(team): Json<Team>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let violations = team.validate();
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let created = state
        .service
        .create(team)
        .await
        .map_err(ApiError::from_write_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /equipos/:id - Overwrite name/league/country; a missing id is a no-op
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(team): Json<Team>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .update(id, team)
        .await
        .map_err(ApiError::from_write_error)?;

    Ok(StatusCode::OK)
}

// DELETE /equipos/:id - Idempotent delete
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use crate::{error::AppError, handlers::NameQuery, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use core_types::Tournament;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

/// # POST /api/v1/tournaments
/// Stores the submitted tournament and echoes it back with its id.
/// Partial bodies, including `{}`, are accepted as-is.
pub async fn add_tournament(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<Tournament>>, JsonRejection>,
) -> Result<Json<Tournament>, AppError> {
    let Json(tournament) = payload?;
    let saved = state.tournaments.add_tournament(tournament).await?;
    Ok(Json(saved))
}

/// # GET /api/v1/tournaments
/// Any request body is ignored.
pub async fn get_all_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Tournament>>, AppError> {
    let tournaments = state.tournaments.get_all_tournaments().await?;
    Ok(Json(tournaments))
}

/// # GET /api/v1/tournaments/findByName?name=
pub async fn find_by_name(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<Tournament>, AppError> {
    let Query(query) = query?;
    let name = query.require()?;
    if name.is_empty() {
        return Err(AppError::NotFound("No tournament with an empty name".to_string()));
    }

    state
        .tournaments
        .find_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No tournament named '{name}'")))
}

/// # GET /api/v1/tournaments/findByDate?date=YYYY-MM-DD
pub async fn find_by_date(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Result<Json<Tournament>, AppError> {
    let Query(query) = query?;
    let date = query.date.ok_or_else(|| {
        AppError::BadRequest("Required request parameter 'date' is not present".to_string())
    })?;

    state
        .tournaments
        .find_by_date(date)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No tournament on {date}")))
}

/// # GET /api/v1/tournaments/:id
pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Tournament>, AppError> {
    let Path(id) = id?;
    state
        .tournaments
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("tournament {id}")))
}

/// # PUT /api/v1/tournaments/:id
pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Tournament>, JsonRejection>,
) -> Result<Json<Tournament>, AppError> {
    let Path(id) = id?;
    let Json(tournament) = payload?;
    let updated = state.tournaments.update_tournament(id, tournament).await?;
    Ok(Json(updated))
}

/// # DELETE /api/v1/tournaments/:id
pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.tournaments.delete_tournament(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

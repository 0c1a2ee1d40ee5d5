use crate::{error::AppError, handlers::NameQuery, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use core_types::GolfCourse;
use std::sync::Arc;

/// # POST /api/v1/golfcourses
/// Creates a course, or updates it when the body carries a stored id.
pub async fn add_golf_course(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<GolfCourse>>, JsonRejection>,
) -> Result<Json<GolfCourse>, AppError> {
    let Json(course) = payload?;
    let saved = state.golf_courses.save_golf_course(course).await?;
    Ok(Json(saved))
}

/// # GET /api/v1/golfcourses
pub async fn get_all_golf_courses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GolfCourse>>, AppError> {
    let courses = state.golf_courses.get_all_golf_courses().await?;
    Ok(Json(courses))
}

/// # GET /api/v1/golfcourses/findByName?name=
pub async fn find_by_name(
    State(state): State<Arc<AppState>>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> Result<Json<GolfCourse>, AppError> {
    let Query(query) = query?;
    let name = query.require()?;
    if name.is_empty() {
        return Err(AppError::NotFound("No golf course with an empty name".to_string()));
    }

    state
        .golf_courses
        .find_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No golf course named '{name}'")))
}

/// # GET /api/v1/golfcourses/:id
pub async fn get_golf_course(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GolfCourse>, AppError> {
    let Path(id) = id?;
    state
        .golf_courses
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("golf course {id}")))
}

/// # DELETE /api/v1/golfcourses/:id
pub async fn delete_golf_course(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.golf_courses.delete_golf_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! HTTP handlers for the course catalog.
//!
//! Each handler is a one-shot transform over the shared store: extract,
//! validate at the boundary, perform a single store operation, respond.
//! Malformed JSON bodies are rejected by the `Json` extractor before any of
//! this code runs.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::courses::error::ApiError;
use crate::courses::types::{CourseView, CoursesQuery, CreateCourse, UpdateCourse};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct RootInfo {
    pub message: &'static str,
}

/// `GET /` — static service greeting, no state interaction.
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "Hello users.",
    })
}

/// `GET /courses` — list projections, optionally filtered by title substring.
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CoursesQuery>,
) -> Json<Vec<CourseView>> {
    let found = state.store.list(query.title.as_deref());
    tracing::debug!(count = found.len(), "Courses listed");
    Json(found)
}

/// `GET /courses/{id}` — projection of the first record matching the id.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CourseView>, ApiError> {
    state.store.get(&id).map(Json).ok_or(ApiError::NotFound)
}

/// `POST /courses` — create with a required non-empty title.
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourse>,
) -> Result<(StatusCode, Json<CourseView>), ApiError> {
    let title = require_title(body.title.as_deref())?;
    let created = state.store.create(title);
    tracing::debug!(id = created.id, "Course created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /courses/{id}` — overwrite the title in place.
///
/// The title check runs before the lookup: a bad body is 400 even when the
/// id does not exist.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCourse>,
) -> Result<StatusCode, ApiError> {
    let title = require_title(body.title.as_deref())?;
    if state.store.update(&id, title) {
        tracing::debug!(%id, "Course updated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// `DELETE /courses/{id}` — always 204, whether or not anything matched.
pub async fn delete_course(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    state.store.remove(&id);
    StatusCode::NO_CONTENT
}

/// `DELETE /__test__/data` — empty the collection. Test harness hook only,
/// not part of the durable public contract.
pub async fn reset_data(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    tracing::debug!("Course collection cleared");
    StatusCode::NO_CONTENT
}

fn require_title(title: Option<&str>) -> Result<&str, ApiError> {
    match title {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(ApiError::InvalidTitle),
    }
}

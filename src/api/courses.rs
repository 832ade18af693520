//! Course endpoints.
//!
//! Reads enrich every course with the live teacher name; writes store the
//! denormalized copy recomputed from the current teacher record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;

use crate::error::AdminResult;
use crate::repo::{check_id, new_record_id};
use crate::schema::types::Course;
use crate::schema::validator;
use crate::store::collections;

use super::response::{DataResponse, MessageResponse};
use super::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
}

/// GET /api/courses
async fn list(State(state): State<AppState>) -> AdminResult<Json<DataResponse<Vec<Course>>>> {
    let mut courses = state.repo.list::<Course>()?;
    for course in &mut courses {
        course.teacher_name = state
            .integrity
            .resolve_teacher_name(course.teacher_id.as_deref())?;
    }
    Ok(Json(DataResponse::new(courses)))
}

/// GET /api/courses/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<DataResponse<Course>>> {
    let mut course = state.repo.get::<Course>(&id)?;
    course.teacher_name = state
        .integrity
        .resolve_teacher_name(course.teacher_id.as_deref())?;
    Ok(Json(DataResponse::new(course)))
}

/// POST /api/courses
async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AdminResult<(StatusCode, Json<DataResponse<Course>>)> {
    let form = validator::validate_course(&body)?;
    state.integrity.ensure_unique(
        collections::COURSES,
        "courseCode",
        &form.course_code,
        None,
        "Course code already exists",
    )?;
    let teacher_name = state
        .integrity
        .resolve_teacher_name(form.teacher_id.as_deref())?;

    let course = Course::create(form, teacher_name, new_record_id(), Utc::now());
    state.repo.insert(&course)?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(course))))
}

/// PUT /api/courses/:id
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AdminResult<Json<DataResponse<Course>>> {
    check_id::<Course>(&id)?;
    let form = validator::validate_course(&body)?;
    let existing = state.repo.get::<Course>(&id)?;
    state.integrity.ensure_unique(
        collections::COURSES,
        "courseCode",
        &form.course_code,
        Some(&id),
        "Course code already exists",
    )?;
    let teacher_name = state
        .integrity
        .resolve_teacher_name(form.teacher_id.as_deref())?;

    let updated = existing.apply(form, teacher_name, Utc::now());
    state.repo.replace(&updated)?;
    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/courses/:id
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<MessageResponse>> {
    let _ = state.repo.get::<Course>(&id)?;
    // Cascade first, then the primary delete; the two are not transactional.
    state.integrity.on_course_delete(&id)?;
    state.repo.delete::<Course>(&id)?;
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

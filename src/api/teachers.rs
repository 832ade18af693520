//! Teacher endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;

use crate::error::AdminResult;
use crate::repo::{check_id, new_record_id};
use crate::schema::types::Teacher;
use crate::schema::validator;
use crate::store::collections;

use super::response::{DataResponse, MessageResponse};
use super::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
}

/// GET /api/teachers
async fn list(State(state): State<AppState>) -> AdminResult<Json<DataResponse<Vec<Teacher>>>> {
    let teachers = state.repo.list::<Teacher>()?;
    Ok(Json(DataResponse::new(teachers)))
}

/// GET /api/teachers/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<DataResponse<Teacher>>> {
    let teacher = state.repo.get::<Teacher>(&id)?;
    Ok(Json(DataResponse::new(teacher)))
}

/// POST /api/teachers
async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AdminResult<(StatusCode, Json<DataResponse<Teacher>>)> {
    let form = validator::validate_teacher(&body)?;
    state.integrity.ensure_unique(
        collections::TEACHERS,
        "teacherId",
        &form.teacher_id,
        None,
        "Teacher ID already exists",
    )?;
    state.integrity.ensure_unique(
        collections::TEACHERS,
        "email",
        &form.email,
        None,
        "Email already exists",
    )?;

    let teacher = Teacher::create(form, new_record_id(), Utc::now());
    state.repo.insert(&teacher)?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(teacher))))
}

/// PUT /api/teachers/:id
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AdminResult<Json<DataResponse<Teacher>>> {
    check_id::<Teacher>(&id)?;
    let form = validator::validate_teacher(&body)?;
    let existing = state.repo.get::<Teacher>(&id)?;
    state.integrity.ensure_unique(
        collections::TEACHERS,
        "teacherId",
        &form.teacher_id,
        Some(&id),
        "Teacher ID already exists",
    )?;
    state.integrity.ensure_unique(
        collections::TEACHERS,
        "email",
        &form.email,
        Some(&id),
        "Email already exists",
    )?;

    // Courses keep whatever teacherName they stored; reads re-resolve it, so
    // a rename becomes visible without touching the courses here.
    let updated = existing.apply(form, Utc::now());
    state.repo.replace(&updated)?;
    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/teachers/:id
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<MessageResponse>> {
    let _ = state.repo.get::<Teacher>(&id)?;
    // Cascade first, then the primary delete; the two are not transactional.
    state.integrity.on_teacher_delete(&id)?;
    state.repo.delete::<Teacher>(&id)?;
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}

//! Student endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;

use crate::error::AdminResult;
use crate::repo::{check_id, new_record_id};
use crate::schema::types::Student;
use crate::schema::validator;
use crate::store::collections;

use super::response::{DataResponse, MessageResponse};
use super::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(get_one).put(update).delete(remove))
}

/// GET /api/students
async fn list(State(state): State<AppState>) -> AdminResult<Json<DataResponse<Vec<Student>>>> {
    let students = state.repo.list::<Student>()?;
    Ok(Json(DataResponse::new(students)))
}

/// GET /api/students/:id
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<DataResponse<Student>>> {
    let student = state.repo.get::<Student>(&id)?;
    Ok(Json(DataResponse::new(student)))
}

/// POST /api/students
async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AdminResult<(StatusCode, Json<DataResponse<Student>>)> {
    let form = validator::validate_student(&body)?;
    state.integrity.ensure_unique(
        collections::STUDENTS,
        "studentId",
        &form.student_id,
        None,
        "Student ID already exists",
    )?;
    state.integrity.ensure_unique(
        collections::STUDENTS,
        "email",
        &form.email,
        None,
        "Email already exists",
    )?;

    let student = Student::create(form, new_record_id(), Utc::now());
    state.repo.insert(&student)?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(student))))
}

/// PUT /api/students/:id
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AdminResult<Json<DataResponse<Student>>> {
    check_id::<Student>(&id)?;
    let form = validator::validate_student(&body)?;
    let existing = state.repo.get::<Student>(&id)?;
    state.integrity.ensure_unique(
        collections::STUDENTS,
        "studentId",
        &form.student_id,
        Some(&id),
        "Student ID already exists",
    )?;
    state.integrity.ensure_unique(
        collections::STUDENTS,
        "email",
        &form.email,
        Some(&id),
        "Email already exists",
    )?;

    let updated = existing.apply(form, Utc::now());
    state.repo.replace(&updated)?;
    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/students/:id
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AdminResult<Json<MessageResponse>> {
    let _ = state.repo.get::<Student>(&id)?;
    // Cascade first, then the primary delete; the two are not transactional.
    state.integrity.on_student_delete(&id)?;
    state.repo.delete::<Student>(&id)?;
    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

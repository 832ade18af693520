//! Health check endpoint: store ping plus per-collection counts.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use crate::error::AdminResult;
use crate::store::collections;

use super::response::{CollectionStats, HealthResponse};
use super::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health(State(state): State<AppState>) -> AdminResult<Json<HealthResponse>> {
    state.store.ping()?;

    let stats = CollectionStats {
        students: state.store.count(collections::STUDENTS)?,
        teachers: state.store.count(collections::TEACHERS)?,
        courses: state.store.count(collections::COURSES)?,
    };

    Ok(Json(HealthResponse {
        success: true,
        message: "Database connection successful".to_string(),
        stats,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

//! Crate-wide error taxonomy.
//!
//! Every failure a request can hit maps to exactly one variant and one HTTP
//! status. Store and internal failures keep their detail in the logs; the
//! caller sees a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::errors::{FieldIssue, ValidationError};
use crate::store::errors::StoreError;

pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Identifier not in the identity-key format. Checked before any lookup.
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),

    /// One or more field-level violations in the input record
    #[error("Validation failed")]
    Validation(#[from] ValidationError),

    /// No record with the given id
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Uniqueness pre-write check hit an existing record
    #[error("{0}")]
    Duplicate(String),

    /// Store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Encode/decode or other bug-class failure
    #[error("Internal server error")]
    Internal(String),
}

impl AdminError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AdminError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::Duplicate(_) => StatusCode::CONFLICT,
            AdminError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure envelope: `{success:false, error}` plus field details for
/// validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldIssue>>,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, details) = match self {
            AdminError::Validation(err) => ("Validation failed".to_string(), Some(err.issues)),
            AdminError::Store(err) => {
                log::error!("store failure: {err}");
                ("Database operation failed".to_string(), None)
            }
            AdminError::Internal(detail) => {
                log::error!("internal failure: {detail}");
                ("Internal server error".to_string(), None)
            }
            other => (other.to_string(), None),
        };
        let body = ErrorBody {
            success: false,
            error,
            details,
        };
        (status, Json(body)).into_response()
    }
}

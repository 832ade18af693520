//! Success envelopes for the REST surface.

use serde::Serialize;

/// Record or record-list response
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Confirmation response for deletes
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Health check response: store reachability plus per-collection counts
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub stats: CollectionStats,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionStats {
    pub students: u64,
    pub teachers: u64,
    pub courses: u64,
}

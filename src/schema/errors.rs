//! Validation error detail.
//!
//! Every violation carries the field path and the message surfaced to the
//! caller; a failed validation reports all violations at once.

use serde::Serialize;
use thiserror::Error;

/// A single field-level violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Field path in the input record (wire name, e.g. "firstName")
    pub field: String,
    /// Message shown to the caller
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validation failure carrying every violation found
#[derive(Debug, Clone, Error)]
#[error("Validation failed")]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Message recorded for the named field, if it failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

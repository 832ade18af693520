//! Store error types.

use thiserror::Error;

/// Failures reported by the document store client.
///
/// The caller-facing message is generic; the detail here is for logs only.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Store could not be reached or failed mid-operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_detail() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }
}

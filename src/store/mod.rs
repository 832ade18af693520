//! # Document Store Seam
//!
//! Persistence is delegated to an external document database. This module
//! defines the client trait the rest of the crate is written against, plus an
//! in-memory backend used by the test suite and local development.
//!
//! Each trait method is a single round trip and is atomic on its own; callers
//! get no cross-operation transaction. A cascade followed by its primary
//! write can therefore be interrupted between the two (see `integrity`).

pub mod errors;
pub mod memory;

pub use errors::StoreError;
pub use memory::MemoryStore;

use serde_json::Value;

/// Collection names used by the service.
pub mod collections {
    pub const STUDENTS: &str = "students";
    pub const TEACHERS: &str = "teachers";
    pub const COURSES: &str = "courses";
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Client interface to the backing document database.
///
/// Documents are JSON objects carrying a string `_id`. Bulk operations touch
/// one collection in one call.
pub trait DocumentStore: Send + Sync {
    /// All documents in a collection.
    fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>>;

    /// One document by `_id`.
    fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>>;

    /// First document whose `field` equals `value`, skipping the document
    /// with `exclude_id` when given. Used for uniqueness pre-write lookups.
    fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<Value>>;

    /// Insert a document.
    fn insert(&self, collection: &str, document: Value) -> StoreResult<()>;

    /// Replace the document with matching `_id`. Returns false when nothing
    /// matched.
    fn replace(&self, collection: &str, id: &str, document: Value) -> StoreResult<bool>;

    /// Delete the document with matching `_id`. Returns false when nothing
    /// matched.
    fn delete(&self, collection: &str, id: &str) -> StoreResult<bool>;

    /// Bulk update: remove `value` from the string array `field` of every
    /// document containing it. Returns the number of documents modified.
    fn pull_from_set(&self, collection: &str, field: &str, value: &str) -> StoreResult<u64>;

    /// Bulk update: drop `fields` from every document whose `match_field`
    /// equals `match_value`. Returns the number of documents modified.
    fn unset_fields(
        &self,
        collection: &str,
        match_field: &str,
        match_value: &str,
        fields: &[&str],
    ) -> StoreResult<u64>;

    /// Number of documents in a collection.
    fn count(&self, collection: &str) -> StoreResult<u64>;

    /// Connectivity check for the health endpoint.
    fn ping(&self) -> StoreResult<()>;
}

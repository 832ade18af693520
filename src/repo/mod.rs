//! # Repository Accessors
//!
//! Typed read/write operations per entity kind over the document store.
//! Identifier-format validation happens here, before any store round trip.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::schema::types::{Course, Student, Teacher};
use crate::store::{collections, DocumentStore};

/// A typed record persisted in a named collection.
pub trait Document: Serialize + DeserializeOwned {
    /// Collection the records live in
    const COLLECTION: &'static str;
    /// Lowercase singular, for "Invalid {kind} ID" messages
    const KIND: &'static str;
    /// Capitalized singular, for "{Title} not found" messages
    const TITLE: &'static str;

    fn id(&self) -> &str;
}

impl Document for Student {
    const COLLECTION: &'static str = collections::STUDENTS;
    const KIND: &'static str = "student";
    const TITLE: &'static str = "Student";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Teacher {
    const COLLECTION: &'static str = collections::TEACHERS;
    const KIND: &'static str = "teacher";
    const TITLE: &'static str = "Teacher";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Document for Course {
    const COLLECTION: &'static str = collections::COURSES;
    const KIND: &'static str = "course";
    const TITLE: &'static str = "Course";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Generate a fresh identity key.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reject identifiers that are not in the identity-key format. Cheap, and
/// must run before any store lookup.
pub fn check_id<T: Document>(id: &str) -> AdminResult<()> {
    match Uuid::parse_str(id) {
        Ok(_) => Ok(()),
        Err(_) => Err(AdminError::InvalidId(T::KIND)),
    }
}

/// Typed accessor over the injected store client.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn DocumentStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// All records of a kind.
    pub fn list<T: Document>(&self) -> AdminResult<Vec<T>> {
        let docs = self.store.find_all(T::COLLECTION)?;
        docs.into_iter().map(decode).collect()
    }

    /// One record by id, or invalid-id / not-found.
    pub fn get<T: Document>(&self, id: &str) -> AdminResult<T> {
        check_id::<T>(id)?;
        let doc = self
            .store
            .find_by_id(T::COLLECTION, id)?
            .ok_or(AdminError::NotFound(T::TITLE))?;
        decode(doc)
    }

    /// Persist a new record.
    pub fn insert<T: Document>(&self, record: &T) -> AdminResult<()> {
        self.store.insert(T::COLLECTION, encode(record)?)?;
        Ok(())
    }

    /// Replace the stored record carrying the same id.
    pub fn replace<T: Document>(&self, record: &T) -> AdminResult<()> {
        let matched = self
            .store
            .replace(T::COLLECTION, record.id(), encode(record)?)?;
        if matched {
            Ok(())
        } else {
            Err(AdminError::NotFound(T::TITLE))
        }
    }

    /// Remove a record by id.
    pub fn delete<T: Document>(&self, id: &str) -> AdminResult<()> {
        check_id::<T>(id)?;
        if self.store.delete(T::COLLECTION, id)? {
            Ok(())
        } else {
            Err(AdminError::NotFound(T::TITLE))
        }
    }
}

fn encode<T: Serialize>(record: &T) -> AdminResult<Value> {
    serde_json::to_value(record).map_err(|e| AdminError::Internal(format!("encode: {e}")))
}

fn decode<T: DeserializeOwned>(doc: Value) -> AdminResult<T> {
    serde_json::from_value(doc).map_err(|e| AdminError::Internal(format!("decode: {e}")))
}

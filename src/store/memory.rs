//! In-memory document store.
//!
//! Collections are vectors of JSON documents behind a single `RwLock`; each
//! trait method takes the lock once, so per-operation atomicity matches what
//! an external document database provides.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use super::{DocumentStore, StoreError, StoreResult};

type Collections = HashMap<String, Vec<Value>>;

/// Data store: collection -> documents
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Collections>> {
        self.data
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Collections>> {
        self.data
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

fn doc_id(doc: &Value) -> Option<&str> {
    doc.get("_id").and_then(Value::as_str)
}

impl DocumentStore for MemoryStore {
    fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        Ok(self.read()?.get(collection).cloned().unwrap_or_default())
    }

    fn find_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Value>> {
        Ok(self.read()?.get(collection).and_then(|docs| {
            docs.iter().find(|doc| doc_id(doc) == Some(id)).cloned()
        }))
    }

    fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<Value>> {
        Ok(self.read()?.get(collection).and_then(|docs| {
            docs.iter()
                .find(|doc| {
                    doc.get(field).and_then(Value::as_str) == Some(value)
                        && exclude_id.map_or(true, |excluded| doc_id(doc) != Some(excluded))
                })
                .cloned()
        }))
    }

    fn insert(&self, collection: &str, document: Value) -> StoreResult<()> {
        self.write()?
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    fn replace(&self, collection: &str, id: &str, document: Value) -> StoreResult<bool> {
        let mut data = self.write()?;
        let Some(docs) = data.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|doc| doc_id(doc) == Some(id)) {
            Some(idx) => {
                docs[idx] = document;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, collection: &str, id: &str) -> StoreResult<bool> {
        let mut data = self.write()?;
        let Some(docs) = data.get_mut(collection) else {
            return Ok(false);
        };
        match docs.iter().position(|doc| doc_id(doc) == Some(id)) {
            Some(idx) => {
                docs.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn pull_from_set(&self, collection: &str, field: &str, value: &str) -> StoreResult<u64> {
        let mut data = self.write()?;
        let Some(docs) = data.get_mut(collection) else {
            return Ok(0);
        };
        let mut modified = 0;
        for doc in docs.iter_mut() {
            if let Some(Value::Array(items)) = doc.get_mut(field) {
                let before = items.len();
                items.retain(|item| item.as_str() != Some(value));
                if items.len() != before {
                    modified += 1;
                }
            }
        }
        Ok(modified)
    }

    fn unset_fields(
        &self,
        collection: &str,
        match_field: &str,
        match_value: &str,
        fields: &[&str],
    ) -> StoreResult<u64> {
        let mut data = self.write()?;
        let Some(docs) = data.get_mut(collection) else {
            return Ok(0);
        };
        let mut modified = 0;
        for doc in docs.iter_mut() {
            if doc.get(match_field).and_then(Value::as_str) != Some(match_value) {
                continue;
            }
            if let Some(obj) = doc.as_object_mut() {
                for field in fields {
                    obj.remove(*field);
                }
                modified += 1;
            }
        }
        Ok(modified)
    }

    fn count(&self, collection: &str) -> StoreResult<u64> {
        Ok(self.read()?.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    fn ping(&self) -> StoreResult<()> {
        self.read().map(|_| ())
    }
}

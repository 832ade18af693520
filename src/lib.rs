//! school-admin - school administration CRUD service over a document store
//!
//! Students, teachers and courses exposed through a REST API; persistence is
//! delegated to an injected document store client.

pub mod api;
pub mod config;
pub mod error;
pub mod integrity;
pub mod repo;
pub mod schema;
pub mod store;

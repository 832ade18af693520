//! # REST Surface
//!
//! One handler per (entity kind, operation) pair, composing validation,
//! integrity checks and the repository. Response envelopes are
//! `{success:true, data}` / `{success:true, message}`; failures render
//! through `AdminError`.

pub mod courses;
pub mod health;
pub mod response;
pub mod server;
pub mod students;
pub mod teachers;

//! Validation layer: typed records for the three entity kinds plus the
//! validation pass that turns untyped input into them.

pub mod errors;
pub mod types;
pub mod validator;

pub use errors::{FieldIssue, ValidationError};
pub use types::{Course, CourseForm, Student, StudentForm, Teacher, TeacherForm};

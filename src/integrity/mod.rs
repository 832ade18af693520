//! # Referential Integrity Coordinator
//!
//! Runs inline with create/update/delete, never as a background process:
//! uniqueness pre-write lookups, the teacher-name denormalization, and the
//! delete cascades. Each cascade issues one bulk store operation per affected
//! collection, before the primary write. The cascade and the primary write
//! are not wrapped in a transaction, so a crash between the two can leave a
//! dangling reference; the gap is accepted and nothing is retried or rolled
//! back.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::schema::types::Teacher;
use crate::store::{collections, DocumentStore};

#[derive(Clone)]
pub struct Coordinator {
    store: Arc<dyn DocumentStore>,
}

impl Coordinator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Uniqueness pre-write check, scoped to exclude the record being
    /// updated. `conflict` is the message surfaced on collision.
    pub fn ensure_unique(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        exclude_id: Option<&str>,
        conflict: &str,
    ) -> AdminResult<()> {
        match self
            .store
            .find_by_field(collection, field, value, exclude_id)?
        {
            Some(_) => Err(AdminError::Duplicate(conflict.to_string())),
            None => Ok(()),
        }
    }

    /// Resolve the denormalized display name for a course's teacher from the
    /// current teacher record. Absent or unresolvable means "no teacher",
    /// never an error.
    pub fn resolve_teacher_name(&self, teacher_id: Option<&str>) -> AdminResult<String> {
        let Some(id) = teacher_id else {
            return Ok(String::new());
        };
        if Uuid::parse_str(id).is_err() {
            return Ok(String::new());
        }
        match self.store.find_by_id(collections::TEACHERS, id)? {
            Some(doc) => {
                let teacher: Teacher = serde_json::from_value(doc)
                    .map_err(|e| AdminError::Internal(format!("decode: {e}")))?;
                Ok(teacher.full_name())
            }
            None => Ok(String::new()),
        }
    }

    /// Student delete: drop the id from every course's enrollment list.
    pub fn on_student_delete(&self, student_id: &str) -> AdminResult<()> {
        self.store
            .pull_from_set(collections::COURSES, "enrolledStudents", student_id)?;
        Ok(())
    }

    /// Course delete: drop the id from student and teacher membership lists.
    pub fn on_course_delete(&self, course_id: &str) -> AdminResult<()> {
        self.store
            .pull_from_set(collections::STUDENTS, "enrolledCourses", course_id)?;
        self.store
            .pull_from_set(collections::TEACHERS, "assignedCourses", course_id)?;
        Ok(())
    }

    /// Teacher delete: clear the reference and denormalized name on every
    /// course that carried it. The courses themselves survive.
    pub fn on_teacher_delete(&self, teacher_id: &str) -> AdminResult<()> {
        self.store.unset_fields(
            collections::COURSES,
            "teacherId",
            teacher_id,
            &["teacherId", "teacherName"],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn seeded() -> (Arc<MemoryStore>, Coordinator) {
        let store = Arc::new(MemoryStore::new());
        let coordinator = Coordinator::new(store.clone());
        (store, coordinator)
    }

    #[test]
    fn test_ensure_unique_flags_collision() {
        let (store, coordinator) = seeded();
        store
            .insert(collections::COURSES, json!({"_id": "c1", "courseCode": "MATH101"}))
            .unwrap();

        let err = coordinator
            .ensure_unique(
                collections::COURSES,
                "courseCode",
                "MATH101",
                None,
                "Course code already exists",
            )
            .unwrap_err();
        assert!(matches!(err, AdminError::Duplicate(msg) if msg == "Course code already exists"));
    }

    #[test]
    fn test_ensure_unique_excludes_record_under_update() {
        let (store, coordinator) = seeded();
        store
            .insert(collections::COURSES, json!({"_id": "c1", "courseCode": "MATH101"}))
            .unwrap();

        // A record may keep its own value.
        coordinator
            .ensure_unique(
                collections::COURSES,
                "courseCode",
                "MATH101",
                Some("c1"),
                "Course code already exists",
            )
            .unwrap();
    }

    #[test]
    fn test_resolve_teacher_name() {
        let (store, coordinator) = seeded();
        let teacher_id = "8d6f3c0e-6f62-4c2e-9f2e-0a1b2c3d4e5f";
        store
            .insert(
                collections::TEACHERS,
                json!({
                    "_id": teacher_id,
                    "firstName": "Ann",
                    "lastName": "Lee",
                    "email": "ann.lee@school.edu",
                    "teacherId": "T-001",
                    "department": "Math",
                    "subject": "Algebra",
                    "assignedCourses": [],
                    "createdAt": "2024-01-01T00:00:00Z",
                    "updatedAt": "2024-01-01T00:00:00Z"
                }),
            )
            .unwrap();

        let name = coordinator
            .resolve_teacher_name(Some(teacher_id))
            .unwrap();
        assert_eq!(name, "Ann Lee");
    }

    #[test]
    fn test_unresolvable_teacher_is_no_teacher() {
        let (_store, coordinator) = seeded();
        assert_eq!(coordinator.resolve_teacher_name(None).unwrap(), "");
        assert_eq!(
            coordinator
                .resolve_teacher_name(Some("not-a-valid-id"))
                .unwrap(),
            ""
        );
        assert_eq!(
            coordinator
                .resolve_teacher_name(Some("8d6f3c0e-6f62-4c2e-9f2e-0a1b2c3d4e5f"))
                .unwrap(),
            ""
        );
    }

    #[test]
    fn test_course_delete_drains_both_membership_lists() {
        let (store, coordinator) = seeded();
        store
            .insert(
                collections::STUDENTS,
                json!({"_id": "s1", "enrolledCourses": ["c1", "c2"]}),
            )
            .unwrap();
        store
            .insert(
                collections::TEACHERS,
                json!({"_id": "t1", "assignedCourses": ["c1"]}),
            )
            .unwrap();

        coordinator.on_course_delete("c1").unwrap();

        let student = store.find_by_id(collections::STUDENTS, "s1").unwrap().unwrap();
        assert_eq!(student["enrolledCourses"], json!(["c2"]));
        let teacher = store.find_by_id(collections::TEACHERS, "t1").unwrap().unwrap();
        assert_eq!(teacher["assignedCourses"], json!([]));
    }

    #[test]
    fn test_teacher_delete_clears_reference_but_keeps_course() {
        let (store, coordinator) = seeded();
        store
            .insert(
                collections::COURSES,
                json!({"_id": "c1", "courseCode": "MATH101",
                       "teacherId": "t1", "teacherName": "Ann Lee"}),
            )
            .unwrap();

        coordinator.on_teacher_delete("t1").unwrap();

        let course = store.find_by_id(collections::COURSES, "c1").unwrap().unwrap();
        assert!(course.get("teacherId").is_none());
        assert!(course.get("teacherName").is_none());
        assert_eq!(course["courseCode"], "MATH101");
    }
}

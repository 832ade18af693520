//! Cascade behavior verified against the store contents, not just the API
//! responses.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use school_admin::api::server::app;
use school_admin::config::ServerConfig;
use school_admin::store::{collections, DocumentStore, MemoryStore};

const STUDENT_A: &str = "11111111-1111-4111-8111-111111111111";
const STUDENT_B: &str = "22222222-2222-4222-8222-222222222222";
const TEACHER_T: &str = "33333333-3333-4333-8333-333333333333";
const COURSE_C: &str = "44444444-4444-4444-8444-444444444444";
const COURSE_D: &str = "55555555-5555-4555-8555-555555555555";
const COURSE_E: &str = "66666666-6666-4666-8666-666666666666";

fn student_doc(id: &str, student_id: &str, enrolled: &[&str]) -> Value {
    json!({
        "_id": id,
        "firstName": "Ann",
        "lastName": "Lee",
        "email": format!("{student_id}@school.edu"),
        "studentId": student_id,
        "grade": "10",
        "dateOfBirth": "2008-04-02",
        "enrolledCourses": enrolled,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn teacher_doc(id: &str, assigned: &[&str]) -> Value {
    json!({
        "_id": id,
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "ann.lee@school.edu",
        "teacherId": "T-001",
        "department": "Math",
        "subject": "Algebra",
        "assignedCourses": assigned,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

fn course_doc(id: &str, code: &str, teacher_id: Option<&str>, enrolled: &[&str]) -> Value {
    let mut doc = json!({
        "_id": id,
        "courseName": "Algebra I",
        "courseCode": code,
        "credits": 3,
        "duration": "1 semester",
        "teacherName": "Ann Lee",
        "enrolledStudents": enrolled,
        "maxStudents": 30,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    });
    if let Some(teacher_id) = teacher_id {
        doc["teacherId"] = json!(teacher_id);
    }
    doc
}

fn seeded_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    store
        .insert(collections::STUDENTS, student_doc(STUDENT_A, "S-001", &[COURSE_C]))
        .unwrap();
    store
        .insert(
            collections::STUDENTS,
            student_doc(STUDENT_B, "S-002", &[COURSE_C, COURSE_D]),
        )
        .unwrap();
    store
        .insert(collections::TEACHERS, teacher_doc(TEACHER_T, &[COURSE_C, COURSE_D]))
        .unwrap();
    store
        .insert(
            collections::COURSES,
            course_doc(COURSE_C, "MATH101", Some(TEACHER_T), &[STUDENT_A, STUDENT_B]),
        )
        .unwrap();
    store
        .insert(
            collections::COURSES,
            course_doc(COURSE_D, "MATH102", Some(TEACHER_T), &[STUDENT_B]),
        )
        .unwrap();
    store
        .insert(collections::COURSES, course_doc(COURSE_E, "SCI200", None, &[]))
        .unwrap();

    let router = app(store.clone(), &ServerConfig::default());
    (store, router)
}

async fn delete(router: &Router, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn student_delete_pulls_exactly_that_id() {
    let (store, router) = seeded_app();

    let status = delete(&router, &format!("/api/students/{STUDENT_A}")).await;
    assert_eq!(status, StatusCode::OK);

    // Course C lost exactly STUDENT_A; course D untouched.
    let c = store.find_by_id(collections::COURSES, COURSE_C).unwrap().unwrap();
    assert_eq!(c["enrolledStudents"], json!([STUDENT_B]));
    let d = store.find_by_id(collections::COURSES, COURSE_D).unwrap().unwrap();
    assert_eq!(d["enrolledStudents"], json!([STUDENT_B]));

    // The student record itself is gone.
    assert!(store
        .find_by_id(collections::STUDENTS, STUDENT_A)
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn course_delete_drains_student_and_teacher_lists() {
    let (store, router) = seeded_app();

    let status = delete(&router, &format!("/api/courses/{COURSE_C}")).await;
    assert_eq!(status, StatusCode::OK);

    let a = store.find_by_id(collections::STUDENTS, STUDENT_A).unwrap().unwrap();
    assert_eq!(a["enrolledCourses"], json!([]));
    let b = store.find_by_id(collections::STUDENTS, STUDENT_B).unwrap().unwrap();
    assert_eq!(b["enrolledCourses"], json!([COURSE_D]));
    let t = store.find_by_id(collections::TEACHERS, TEACHER_T).unwrap().unwrap();
    assert_eq!(t["assignedCourses"], json!([COURSE_D]));

    assert!(store
        .find_by_id(collections::COURSES, COURSE_C)
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn teacher_delete_clears_referencing_courses_and_nothing_else() {
    let (store, router) = seeded_app();

    let status = delete(&router, &format!("/api/teachers/{TEACHER_T}")).await;
    assert_eq!(status, StatusCode::OK);

    // Both referencing courses lose the reference and the denormalized name
    // but otherwise persist unchanged.
    for course_id in [COURSE_C, COURSE_D] {
        let course = store.find_by_id(collections::COURSES, course_id).unwrap().unwrap();
        assert!(course.get("teacherId").is_none());
        assert!(course.get("teacherName").is_none());
        assert_eq!(course["duration"], "1 semester");
        assert_eq!(course["maxStudents"], 30);
    }

    // The unrelated course is untouched.
    let e = store.find_by_id(collections::COURSES, COURSE_E).unwrap().unwrap();
    assert_eq!(e["teacherName"], "Ann Lee");

    assert!(store
        .find_by_id(collections::TEACHERS, TEACHER_T)
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn delete_of_missing_record_runs_no_cascade() {
    let (store, router) = seeded_app();

    let status = delete(
        &router,
        "/api/teachers/99999999-9999-4999-8999-999999999999",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Existence is checked before the cascade, so course references survive.
    let c = store.find_by_id(collections::COURSES, COURSE_C).unwrap().unwrap();
    assert_eq!(c["teacherId"], TEACHER_T);
}

//! Field-level validation for incoming records.
//!
//! Given an untyped JSON body and a target entity kind, produce either a
//! fully-typed form or the list of every field-level violation. Runs before
//! any existence or uniqueness check; no side effects. Unknown fields are
//! ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::errors::{FieldIssue, ValidationError};
use super::types::{CourseForm, StudentForm, TeacherForm};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Validate a student submission.
pub fn validate_student(input: &Value) -> Result<StudentForm, ValidationError> {
    let mut issues = Vec::new();

    let first_name = required_string(input, "firstName", "First name is required", &mut issues);
    let last_name = required_string(input, "lastName", "Last name is required", &mut issues);
    let email = email_field(input, &mut issues);
    let student_id = required_string(input, "studentId", "Student ID is required", &mut issues);
    let grade = required_string(input, "grade", "Grade is required", &mut issues);
    let date_of_birth =
        required_string(input, "dateOfBirth", "Date of birth is required", &mut issues);
    let phone_number = optional_string(input, "phoneNumber");
    let address = optional_string(input, "address");

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }
    Ok(StudentForm {
        first_name,
        last_name,
        email,
        student_id,
        grade,
        date_of_birth,
        phone_number,
        address,
    })
}

/// Validate a teacher submission.
pub fn validate_teacher(input: &Value) -> Result<TeacherForm, ValidationError> {
    let mut issues = Vec::new();

    let first_name = required_string(input, "firstName", "First name is required", &mut issues);
    let last_name = required_string(input, "lastName", "Last name is required", &mut issues);
    let email = email_field(input, &mut issues);
    let teacher_id = required_string(input, "teacherId", "Teacher ID is required", &mut issues);
    let department = required_string(input, "department", "Department is required", &mut issues);
    let subject = required_string(input, "subject", "Subject is required", &mut issues);
    let phone_number = optional_string(input, "phoneNumber");
    let address = optional_string(input, "address");

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }
    Ok(TeacherForm {
        first_name,
        last_name,
        email,
        teacher_id,
        department,
        subject,
        phone_number,
        address,
    })
}

/// Validate a course submission.
pub fn validate_course(input: &Value) -> Result<CourseForm, ValidationError> {
    let mut issues = Vec::new();

    let course_name = required_string(input, "courseName", "Course name is required", &mut issues);
    let course_code = required_string(input, "courseCode", "Course code is required", &mut issues);
    let description = optional_string(input, "description");
    let credits = positive_int(input, "credits", "Credits must be at least 1", &mut issues);
    let duration = required_string(input, "duration", "Duration is required", &mut issues);
    let teacher_id = optional_string(input, "teacherId");
    let max_students = positive_int(
        input,
        "maxStudents",
        "Maximum students must be at least 1",
        &mut issues,
    );
    let schedule = optional_string(input, "schedule");

    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }
    Ok(CourseForm {
        course_name,
        course_code,
        description,
        credits,
        duration,
        teacher_id,
        max_students,
        schedule,
    })
}

/// Extract a required non-empty string, recording a violation otherwise.
fn required_string(
    input: &Value,
    field: &str,
    message: &str,
    issues: &mut Vec<FieldIssue>,
) -> String {
    match input.get(field).and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => {
            issues.push(FieldIssue::new(field, message));
            String::new()
        }
    }
}

/// Extract an optional string; empty or absent means absent.
fn optional_string(input: &Value, field: &str) -> Option<String> {
    input
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn email_field(input: &Value, issues: &mut Vec<FieldIssue>) -> String {
    let value = input.get("email").and_then(Value::as_str).unwrap_or("");
    if EMAIL_RE.is_match(value) {
        value.to_string()
    } else {
        issues.push(FieldIssue::new("email", "Invalid email address"));
        String::new()
    }
}

/// Extract an integer that must be at least 1. Floats and non-numbers are
/// violations, not coerced.
fn positive_int(input: &Value, field: &str, message: &str, issues: &mut Vec<FieldIssue>) -> u32 {
    match input.get(field).and_then(Value::as_i64) {
        Some(n) if n >= 1 && n <= i64::from(u32::MAX) => n as u32,
        _ => {
            issues.push(FieldIssue::new(field, message));
            0
        }
    }
}

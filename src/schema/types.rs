//! Typed records for the three entity kinds.
//!
//! Wire names are preserved (camelCase, string `_id`); timestamps are UTC.
//! Forms are the validated subset a caller may submit: identity, timestamps
//! and membership lists are never taken from input. Membership lists are
//! mutated only by the integrity coordinator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student record as persisted in the `students` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub grade: String,
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub enrolled_courses: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated student input
#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub grade: String,
    pub date_of_birth: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl Student {
    /// Build a new record from a validated form.
    pub fn create(form: StudentForm, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            student_id: form.student_id,
            grade: form.grade,
            date_of_birth: form.date_of_birth,
            phone_number: form.phone_number,
            address: form.address,
            enrolled_courses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated form on top of this record. Identity, enrollment
    /// list and creation time are preserved; the update time is refreshed.
    pub fn apply(&self, form: StudentForm, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            student_id: form.student_id,
            grade: form.grade,
            date_of_birth: form.date_of_birth,
            phone_number: form.phone_number,
            address: form.address,
            enrolled_courses: self.enrolled_courses.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// A teacher record as persisted in the `teachers` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub teacher_id: String,
    pub department: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub assigned_courses: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated teacher input
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub teacher_id: String,
    pub department: String,
    pub subject: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl Teacher {
    /// Display name denormalized onto courses.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn create(form: TeacherForm, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            teacher_id: form.teacher_id,
            department: form.department,
            subject: form.subject,
            phone_number: form.phone_number,
            address: form.address,
            assigned_courses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&self, form: TeacherForm, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            teacher_id: form.teacher_id,
            department: form.department,
            subject: form.subject,
            phone_number: form.phone_number,
            address: form.address,
            assigned_courses: self.assigned_courses.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// A course record as persisted in the `courses` collection.
///
/// `teacher_name` is a denormalized copy of the referenced teacher's display
/// name. It is recomputed on every course write and re-resolved on reads; the
/// stored copy lags behind teacher renames until the next course write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: String,
    pub course_name: String,
    pub course_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub credits: u32,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(default)]
    pub teacher_name: String,
    #[serde(default)]
    pub enrolled_students: Vec<String>,
    pub max_students: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated course input
#[derive(Debug, Clone, PartialEq)]
pub struct CourseForm {
    pub course_name: String,
    pub course_code: String,
    pub description: Option<String>,
    pub credits: u32,
    pub duration: String,
    pub teacher_id: Option<String>,
    pub max_students: u32,
    pub schedule: Option<String>,
}

impl Course {
    pub fn create(form: CourseForm, teacher_name: String, id: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            course_name: form.course_name,
            course_code: form.course_code,
            description: form.description,
            credits: form.credits,
            duration: form.duration,
            teacher_id: form.teacher_id,
            teacher_name,
            enrolled_students: Vec::new(),
            max_students: form.max_students,
            schedule: form.schedule,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&self, form: CourseForm, teacher_name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            course_name: form.course_name,
            course_code: form.course_code,
            description: form.description,
            credits: form.credits,
            duration: form.duration,
            teacher_id: form.teacher_id,
            teacher_name,
            enrolled_students: self.enrolled_students.clone(),
            max_students: form.max_students,
            schedule: form.schedule,
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

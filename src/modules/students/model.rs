//! Student entity and wire DTOs.
//!
//! The entity is deliberately not serializable: every response body
//! goes through [`StudentDto`], and enrollments never ride along on a
//! student payload (they have their own endpoints).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student row as stored.
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub student_id: i32,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// The student wire shape, used for both output and full replacement
/// via PUT. The id in a PUT body must match the path id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct StudentDto {
    pub student_id: i32,
    #[validate(length(min = 3, max = 100, message = "name must be 3 to 100 characters"))]
    pub name: String,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            student_id: student.student_id,
            name: student.name,
        }
    }
}

/// DTO for creating a student. The id is server-assigned.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 3, max = 100, message = "name must be 3 to 100 characters"))]
    pub name: String,
}

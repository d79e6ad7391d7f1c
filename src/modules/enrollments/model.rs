use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An enrollment row: the student/course join with its timestamp.
#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub student_id: i32,
    pub course_id: i32,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EnrollmentDto {
    pub student_id: i32,
    pub course_id: i32,
    pub enrolled_at: chrono::DateTime<chrono::Utc>,
}

impl From<Enrollment> for EnrollmentDto {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
            enrolled_at: enrollment.enrolled_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEnrollmentDto {
    pub course_id: i32,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A course row as stored. [`CourseDto`] is the wire shape.
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub course_id: i32,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CourseDto {
    pub course_id: i32,
    #[validate(length(min = 1, max = 200, message = "title must be 1 to 200 characters"))]
    pub title: String,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            course_id: course.course_id,
            title: course.title,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1 to 200 characters"))]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_dto_validation() {
        let valid = CreateCourseDto {
            title: "Analytical Engines 101".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CreateCourseDto {
            title: "".to_string(),
        };
        assert!(empty.validate().is_err());

        let too_long = CreateCourseDto {
            title: "x".repeat(201),
        };
        assert!(too_long.validate().is_err());
    }
}

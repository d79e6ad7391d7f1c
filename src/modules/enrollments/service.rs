use sqlx::PgPool;
use tracing::instrument;

use crate::modules::courses::model::Course;
use crate::modules::enrollments::model::Enrollment;
use crate::utils::errors::AppError;

pub struct EnrollmentService;

impl EnrollmentService {
    #[instrument(skip(db))]
    pub async fn enroll(
        db: &PgPool,
        student_id: i32,
        course_id: i32,
    ) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"INSERT INTO enrollments (student_id, course_id)
               VALUES ($1, $2)
               RETURNING student_id, course_id, enrolled_at"#,
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::conflict(anyhow::anyhow!(
                        "Student {} is already enrolled in course {}",
                        student_id,
                        course_id
                    ));
                }
                if db_err.is_foreign_key_violation() {
                    return AppError::not_found(anyhow::anyhow!("Student or course not found"));
                }
            }
            AppError::from(e)
        })?;

        Ok(enrollment)
    }

    /// The courses a student is enrolled in.
    #[instrument(skip(db))]
    pub async fn get_student_courses(db: &PgPool, student_id: i32) -> Result<Vec<Course>, AppError> {
        let student_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM students WHERE student_id = $1)",
        )
        .bind(student_id)
        .fetch_one(db)
        .await?;

        if !student_exists {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Student with ID {} not found",
                student_id
            )));
        }

        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT c.course_id, c.title, c.created_at, c.updated_at
               FROM courses c
               INNER JOIN enrollments e ON e.course_id = c.course_id
               WHERE e.student_id = $1
               ORDER BY c.course_id"#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn unenroll(db: &PgPool, student_id: i32, course_id: i32) -> Result<(), AppError> {
        let result =
            sqlx::query("DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2")
                .bind(student_id)
                .bind(course_id)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Enrollment not found for student {} and course {}",
                student_id,
                course_id
            )));
        }

        Ok(())
    }
}

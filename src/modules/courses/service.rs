use sqlx::PgPool;
use tracing::instrument;

use crate::modules::courses::model::{Course, CourseDto, CreateCourseDto};
use crate::modules::students::model::Student;
use crate::utils::errors::AppError;

pub struct CourseService;

impl CourseService {
    #[instrument(skip(db))]
    pub async fn get_all_courses(db: &PgPool) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"SELECT course_id, title, created_at, updated_at
               FROM courses
               ORDER BY course_id"#,
        )
        .fetch_all(db)
        .await?;

        Ok(courses)
    }

    #[instrument(skip(db))]
    pub async fn get_course_by_id(db: &PgPool, id: i32) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"SELECT course_id, title, created_at, updated_at
               FROM courses
               WHERE course_id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Course with ID {} not found", id)))?;

        Ok(course)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_course(db: &PgPool, dto: CreateCourseDto) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"INSERT INTO courses (title)
               VALUES ($1)
               RETURNING course_id, title, created_at, updated_at"#,
        )
        .bind(&dto.title)
        .fetch_one(db)
        .await?;

        Ok(course)
    }

    /// Full replacement keyed by id, same lost-update contract as the
    /// student service: zero affected rows maps to not-found.
    #[instrument(skip(db, dto))]
    pub async fn update_course(db: &PgPool, id: i32, dto: CourseDto) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"UPDATE courses
               SET title = $1, updated_at = NOW()
               WHERE course_id = $2"#,
        )
        .bind(&dto.title)
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course with ID {} not found",
                id
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_course(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE course_id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course with ID {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Everyone enrolled in the course, through the enrollments join.
    #[instrument(skip(db))]
    pub async fn get_roster(db: &PgPool, course_id: i32) -> Result<Vec<Student>, AppError> {
        let course_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM courses WHERE course_id = $1)")
                .bind(course_id)
                .fetch_one(db)
                .await?;

        if !course_exists {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Course with ID {} not found",
                course_id
            )));
        }

        let students = sqlx::query_as::<_, Student>(
            r#"SELECT s.student_id, s.name, s.created_at, s.updated_at
               FROM students s
               INNER JOIN enrollments e ON e.student_id = s.student_id
               WHERE e.course_id = $1
               ORDER BY s.student_id"#,
        )
        .bind(course_id)
        .fetch_all(db)
        .await?;

        Ok(students)
    }
}

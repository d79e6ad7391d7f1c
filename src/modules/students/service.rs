use sqlx::PgPool;
use tracing::instrument;

use crate::modules::students::model::{CreateStudentDto, Student, StudentDto};
use crate::utils::errors::AppError;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_all_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"SELECT student_id, name, created_at, updated_at
               FROM students
               ORDER BY student_id"#,
        )
        .fetch_all(db)
        .await?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: i32) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"SELECT student_id, name, created_at, updated_at
               FROM students
               WHERE student_id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student with ID {} not found", id)))?;

        Ok(student)
    }

    #[instrument(skip(db, dto))]
    pub async fn add_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"INSERT INTO students (name)
               VALUES ($1)
               RETURNING student_id, name, created_at, updated_at"#,
        )
        .bind(&dto.name)
        .fetch_one(db)
        .await?;

        Ok(student)
    }

    /// Full replacement keyed by id.
    ///
    /// A single UPDATE decides the outcome: zero affected rows means
    /// the record is gone (never there, or deleted since the caller
    /// read it) and maps to not-found rather than a server error.
    #[instrument(skip(db, dto))]
    pub async fn update_student(db: &PgPool, id: i32, dto: StudentDto) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"UPDATE students
               SET name = $1, updated_at = NOW()
               WHERE student_id = $2"#,
        )
        .bind(&dto.name)
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Student with ID {} not found",
                id
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Student with ID {} not found",
                id
            )));
        }

        Ok(())
    }
}

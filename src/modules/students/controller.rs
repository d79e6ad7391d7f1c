use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::students::model::{CreateStudentDto, StudentDto};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students; empty array when none exist", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<StudentDto>>, AppError> {
    let students = StudentService::get_all_students(&state.db).await?;
    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StudentDto>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    Ok(Json(student.into()))
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created; Location points at the new record", body = StudentDto),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<(StatusCode, [(axum::http::HeaderName, String); 1], Json<StudentDto>), AppError> {
    let student = StudentService::add_student(&state.db, dto).await?;
    let location = format!("/api/students/{}", student.student_id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(student.into()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentDto,
    responses(
        (status = 204, description = "Student replaced"),
        (status = 400, description = "ID mismatch or invalid body", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<StatusCode, AppError> {
    // Rejected before any storage access.
    if id != dto.student_id {
        return Err(AppError::bad_request(anyhow::anyhow!("Student ID mismatch")));
    }

    StudentService::update_student(&state.db, id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

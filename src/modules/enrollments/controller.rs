use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::courses::model::CourseDto;
use crate::modules::enrollments::model::{CreateEnrollmentDto, EnrollmentDto};
use crate::modules::enrollments::service::EnrollmentService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/students/{id}/enrollments",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = CreateEnrollmentDto,
    responses(
        (status = 201, description = "Enrollment created", body = EnrollmentDto),
        (status = 404, description = "Student or course not found", body = ErrorResponse),
        (status = 409, description = "Already enrolled", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<CreateEnrollmentDto>,
) -> Result<(StatusCode, Json<EnrollmentDto>), AppError> {
    let enrollment = EnrollmentService::enroll(&state.db, student_id, dto.course_id).await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}/enrollments",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Courses the student is enrolled in", body = Vec<CourseDto>),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn get_student_enrollments(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<Json<Vec<CourseDto>>, AppError> {
    let courses = EnrollmentService::get_student_courses(&state.db, student_id).await?;
    Ok(Json(courses.into_iter().map(CourseDto::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}/enrollments/{course_id}",
    params(
        ("id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Enrollment removed"),
        (status = 404, description = "Enrollment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Enrollments"
)]
#[instrument(skip(state))]
pub async fn unenroll_student(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    EnrollmentService::unenroll(&state.db, student_id, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

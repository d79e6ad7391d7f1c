use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
};
use tracing::instrument;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::courses::model::{CourseDto, CreateCourseDto};
use crate::modules::courses::service::CourseService;
use crate::modules::students::model::StudentDto;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/courses",
    responses(
        (status = 200, description = "All courses; empty array when none exist", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseDto>>, AppError> {
    let courses = CourseService::get_all_courses(&state.db).await?;
    Ok(Json(courses.into_iter().map(CourseDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CourseDto>, AppError> {
    let course = CourseService::get_course_by_id(&state.db, id).await?;
    Ok(Json(course.into()))
}

#[utoipa::path(
    post,
    path = "/api/courses",
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Course created; Location points at the new record", body = CourseDto),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn create_course(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCourseDto>,
) -> Result<(StatusCode, [(axum::http::HeaderName, String); 1], Json<CourseDto>), AppError> {
    let course = CourseService::add_course(&state.db, dto).await?;
    let location = format!("/api/courses/{}", course.course_id);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(course.into()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseDto,
    responses(
        (status = 204, description = "Course replaced"),
        (status = 400, description = "ID mismatch or invalid body", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state, dto))]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<CourseDto>,
) -> Result<StatusCode, AppError> {
    if id != dto.course_id {
        return Err(AppError::bad_request(anyhow::anyhow!("Course ID mismatch")));
    }

    CourseService::update_course(&state.db, id, dto).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    CourseService::delete_course(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/courses/{id}/roster",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Students enrolled in the course", body = Vec<StudentDto>),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
#[instrument(skip(state))]
pub async fn get_course_roster(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<StudentDto>>, AppError> {
    let students = CourseService::get_roster(&state.db, id).await?;
    Ok(Json(students.into_iter().map(StudentDto::from).collect()))
}

use crate::modules::enrollments::controller::{
    enroll_student, get_student_enrollments, unenroll_student,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Nested under `/api/students/{id}/enrollments` by the main router.
pub fn init_enrollments_router() -> Router<AppState> {
    Router::new()
        .route("/", post(enroll_student).get(get_student_enrollments))
        .route("/{course_id}", delete(unenroll_student))
}

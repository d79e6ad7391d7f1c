use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto,
    ResetPasswordRequest,
};
use crate::modules::courses::model::{CourseDto, CreateCourseDto};
use crate::modules::enrollments::model::{CreateEnrollmentDto, EnrollmentDto};
use crate::modules::students::model::{CreateStudentDto, StudentDto};
use crate::modules::users::model::{AssignRoleDto, UserDto, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::me,
        crate::modules::auth::controller::forgot_password,
        crate::modules::auth::controller::reset_password,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_roles,
        crate::modules::users::controller::assign_role,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::courses::controller::get_course_roster,
        crate::modules::enrollments::controller::enroll_student,
        crate::modules::enrollments::controller::get_student_enrollments,
        crate::modules::enrollments::controller::unenroll_student,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            LoginRequest,
            LoginResponse,
            RegisterRequestDto,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            UserDto,
            UserRole,
            AssignRoleDto,
            StudentDto,
            CreateStudentDto,
            CourseDto,
            CreateCourseDto,
            EnrollmentDto,
            CreateEnrollmentDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Users", description = "Identity and role management"),
        (name = "Students", description = "Student record management"),
        (name = "Courses", description = "Course catalog management"),
        (name = "Enrollments", description = "Student/course enrollment")
    ),
    info(
        title = "Rosterly API",
        version = "0.1.0",
        description = "A student-records REST API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

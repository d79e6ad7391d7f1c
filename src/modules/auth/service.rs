use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::email::EmailConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, create_reset_token, verify_reset_token};
use crate::utils::password::{hash_password, verify_password};

use super::model::{ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequestDto, ResetPasswordRequest};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (first_name, last_name, email, password, role)
               VALUES ($1, $2, $3, $4, 'staff')
               RETURNING id, first_name, last_name, email, role, created_at, updated_at"#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await?;

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            first_name: String,
            last_name: String,
            email: String,
            password: String,
            role: crate::modules::users::model::UserRole,
        }

        let user_with_password = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, first_name, last_name, email, password, role FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let is_valid = verify_password(&dto.password, &user_with_password.password)?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let access_token = create_access_token(
            user_with_password.id,
            &user_with_password.email,
            user_with_password.role.as_str(),
            jwt_config,
        )?;

        let user = crate::modules::users::model::UserDto {
            id: user_with_password.id,
            first_name: user_with_password.first_name,
            last_name: user_with_password.last_name,
            email: user_with_password.email,
            role: user_with_password.role,
        };

        Ok(LoginResponse { access_token, user })
    }

    /// Sends a reset link if the account exists. The caller always gets
    /// the same response either way, so the endpoint leaks nothing.
    #[instrument(skip(db, dto, jwt_config, email_config))]
    pub async fn forgot_password(
        db: &PgPool,
        dto: ForgotPasswordRequest,
        jwt_config: &JwtConfig,
        email_config: &EmailConfig,
    ) -> Result<(), AppError> {
        let user: Option<User> = sqlx::query_as(
            "SELECT id, first_name, last_name, email, role, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        let Some(user) = user else {
            return Ok(());
        };

        let reset_token = create_reset_token(user.id, &user.email, jwt_config)?;

        EmailService::new(email_config.clone())
            .send_password_reset_email(&user.email, &user.first_name, &reset_token)
            .await?;

        Ok(())
    }

    #[instrument(skip(db, dto, jwt_config))]
    pub async fn reset_password(
        db: &PgPool,
        dto: ResetPasswordRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(), AppError> {
        let claims = verify_reset_token(&dto.token, jwt_config)?;
        let user_id = Uuid::parse_str(&claims.user_id)
            .map_err(|_| AppError::bad_request(anyhow::anyhow!("Invalid reset token")))?;

        let hashed_password = hash_password(&dto.new_password)?;

        let result = sqlx::query(
            "UPDATE users SET password = $1, updated_at = NOW() WHERE id = $2 AND email = $3",
        )
        .bind(&hashed_password)
        .bind(user_id)
        .bind(&claims.email)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::bad_request(anyhow::anyhow!("Invalid reset token")));
        }

        Ok(())
    }
}

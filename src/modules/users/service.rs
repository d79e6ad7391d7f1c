use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, first_name, last_name, email, role, created_at, updated_at
               FROM users
               ORDER BY created_at"#,
        )
        .fetch_all(db)
        .await?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: Uuid) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, first_name, last_name, email, role, created_at, updated_at
               FROM users
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn assign_role(db: &PgPool, id: Uuid, role: UserRole) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"UPDATE users
               SET role = $1, updated_at = NOW()
               WHERE id = $2
               RETURNING id, first_name, last_name, email, role, created_at, updated_at"#,
        )
        .bind(role)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(user)
    }
}

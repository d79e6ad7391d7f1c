//! Identity-store models.
//!
//! Users authenticate the management surface of the API. Two roles
//! exist; self-registration always produces `staff`, and the only way
//! to mint the first `admin` is the `create-admin` CLI command.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Staff
    }
}

/// A user row as stored. The password hash is never selected into this
/// type, and the type is not serializable; [`UserDto`] is the wire
/// shape.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssignRoleDto {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_roundtrip() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, r#""admin""#);

        let role: UserRole = serde_json::from_str(r#""staff""#).unwrap();
        assert_eq!(role, UserRole::Staff);
    }

    #[test]
    fn test_role_rejects_unknown_value() {
        assert!(serde_json::from_str::<UserRole>(r#""superuser""#).is_err());
    }

    #[test]
    fn test_user_dto_mapping() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            role: UserRole::Admin,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let dto = UserDto::from(user.clone());
        assert_eq!(dto.id, user.id);
        assert_eq!(dto.email, "grace@example.com");
        assert_eq!(dto.role, UserRole::Admin);
    }
}

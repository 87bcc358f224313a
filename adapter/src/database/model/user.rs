use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use sqlx::FromRow;
use std::str::FromStr;

#[derive(FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
            created_at,
        } = value;
        Ok(User {
            user_id,
            user_name,
            email,
            role: Role::from_str(&role)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            created_at,
        })
    }
}

/// Credential row used only by password verification.
#[derive(FromRow)]
pub struct UserItem {
    pub user_id: UserId,
    pub password_hash: String,
}

use crate::database::{model::user::UserRow, ConnectionPool, PG_UNIQUE_VIOLATION};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;
        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (user_name, email, password_hash, role)
                VALUES ($1, $2, $3, 'user')
                RETURNING user_id, user_name, email, role, created_at
            "#,
        )
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                AppError::UnprocessableEntity("this email is already registered".into())
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        row.try_into()
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, created_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::role::Role;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "../migrations")]
    async fn created_user_can_be_fetched(pool: PgPool) {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo
            .create(CreateUser {
                user_name: "Test User".into(),
                email: "test@example.com".into(),
                password: "hunter2!".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.role, Role::User);

        let fetched = repo
            .find_current_user(created.user_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_email_is_rejected(pool: PgPool) {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let event = |name: &str| CreateUser {
            user_name: name.into(),
            email: "dup@example.com".into(),
            password: "hunter2!".into(),
        };
        repo.create(event("First")).await.unwrap();
        let err = repo.create(event("Second")).await.unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}

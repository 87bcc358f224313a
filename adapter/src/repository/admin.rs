use crate::database::{
    model::admin::{DashboardStatsRow, ReviewSummaryRow, SpotSummaryRow, UserSummaryRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    admin::{DashboardStats, ReviewSummary, SpotSummary, UserSummary},
    id::{ReviewId, SpotId, UserId},
};
use kernel::repository::admin::AdminRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AdminRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AdminRepository for AdminRepositoryImpl {
    async fn list_users(&self) -> AppResult<Vec<UserSummary>> {
        let rows: Vec<UserSummaryRow> = sqlx::query_as(
            r#"
                SELECT
                    u.user_id,
                    u.user_name,
                    u.email,
                    u.created_at,
                    (SELECT COUNT(*) FROM parking_spots AS s WHERE s.owned_by = u.user_id)
                        AS spots_count,
                    (SELECT COUNT(*) FROM reviews AS r WHERE r.user_id = u.user_id)
                        AS reviews_count
                FROM users AS u
                ORDER BY u.created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(UserSummary::from).collect())
    }

    async fn list_spots(&self) -> AppResult<Vec<SpotSummary>> {
        let rows: Vec<SpotSummaryRow> = sqlx::query_as(
            r#"
                SELECT
                    s.spot_id,
                    s.location,
                    s.is_available,
                    s.created_at,
                    u.user_name AS owner_name,
                    u.email AS owner_email,
                    COUNT(r.review_id) AS reviews_count,
                    ROUND(AVG(r.rating)::numeric, 2)::float8 AS average_rating
                FROM parking_spots AS s
                INNER JOIN users AS u ON s.owned_by = u.user_id
                LEFT JOIN reviews AS r ON r.parking_spot_id = s.spot_id
                GROUP BY s.spot_id, s.location, s.is_available, s.created_at,
                         u.user_name, u.email
                ORDER BY s.created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(SpotSummary::from).collect())
    }

    async fn list_reviews(&self) -> AppResult<Vec<ReviewSummary>> {
        let rows: Vec<ReviewSummaryRow> = sqlx::query_as(
            r#"
                SELECT
                    r.review_id,
                    r.rating,
                    r.comment,
                    r.created_at,
                    r.updated_at,
                    u.user_name AS reviewer_name,
                    u.email AS reviewer_email,
                    r.parking_spot_id,
                    s.location AS spot_location
                FROM reviews AS r
                INNER JOIN users AS u ON r.user_id = u.user_id
                INNER JOIN parking_spots AS s ON r.parking_spot_id = s.spot_id
                ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ReviewSummary::from).collect())
    }

    async fn stats(&self) -> AppResult<DashboardStats> {
        let row: DashboardStatsRow = sqlx::query_as(
            r#"
                SELECT
                    (SELECT COUNT(*) FROM users) AS total_users,
                    (SELECT COUNT(*) FROM parking_spots) AS total_spots,
                    (SELECT COUNT(*) FROM reviews) AS total_reviews,
                    (SELECT COUNT(*) FROM parking_spots WHERE is_available)
                        AS available_spots,
                    (SELECT COUNT(*) FROM users
                        WHERE created_at >= NOW() - INTERVAL '30 days') AS new_users_30d,
                    (SELECT COUNT(*) FROM parking_spots
                        WHERE created_at >= NOW() - INTERVAL '30 days') AS new_spots_30d,
                    (SELECT COUNT(*) FROM reviews
                        WHERE created_at >= NOW() - INTERVAL '30 days') AS new_reviews_30d,
                    (SELECT ROUND(AVG(rating)::numeric, 2)::float8 FROM reviews)
                        AS average_rating
            "#,
        )
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn delete_user(&self, user_id: UserId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!("user {user_id} not found")));
        }
        Ok(())
    }

    async fn delete_spot(&self, spot_id: SpotId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM parking_spots WHERE spot_id = $1")
            .bind(spot_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "parking spot {spot_id} not found"
            )));
        }
        Ok(())
    }

    async fn delete_review(&self, review_id: ReviewId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "review {review_id} not found"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "../migrations")]
    async fn stats_reflect_current_totals(pool: PgPool) {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner = user_repo
            .create(CreateUser {
                user_name: "Olivia Owner".into(),
                email: "olivia@example.com".into(),
                password: "passw0rd!".into(),
            })
            .await
            .unwrap()
            .user_id;

        sqlx::query("INSERT INTO parking_spots (location, owned_by) VALUES ('123 Main St', $1)")
            .bind(owner)
            .execute(&pool)
            .await
            .unwrap();

        let repo = AdminRepositoryImpl::new(ConnectionPool::new(pool));
        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.total_users, 1);
        assert_eq!(stats.total_spots, 1);
        assert_eq!(stats.available_spots, 1);
        assert_eq!(stats.total_reviews, 0);
        assert_eq!(stats.new_users_30d, 1);
        assert!(stats.average_rating.is_none());
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn deleting_a_user_cascades_to_their_spots(pool: PgPool) {
        let user_repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner = user_repo
            .create(CreateUser {
                user_name: "Olivia Owner".into(),
                email: "olivia@example.com".into(),
                password: "passw0rd!".into(),
            })
            .await
            .unwrap()
            .user_id;

        sqlx::query("INSERT INTO parking_spots (location, owned_by) VALUES ('123 Main St', $1)")
            .bind(owner)
            .execute(&pool)
            .await
            .unwrap();

        let repo = AdminRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        repo.delete_user(owner).await.unwrap();

        let spots: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM parking_spots")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(spots.0, 0);

        let err = repo.delete_user(owner).await.unwrap_err();
        assert!(matches!(err, AppError::EntityNotFound(_)));
    }
}

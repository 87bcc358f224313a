use crate::database::{
    model::review::{ReviewRow, UserReviewRow},
    ConnectionPool, PG_UNIQUE_VIOLATION,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ReviewId, SpotId, UserId},
    review::{
        event::{CreateReview, DeleteReview, UpdateReview},
        Review, SpotRatingSummary, UserReview,
    },
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<Review> {
        self.check_spot_exists(event.spot_id).await?;

        let row: ReviewRow = sqlx::query_as(
            r#"
                WITH inserted AS (
                    INSERT INTO reviews (parking_spot_id, user_id, rating, comment)
                    VALUES ($1, $2, $3, $4)
                    RETURNING review_id, parking_spot_id, user_id, rating, comment,
                              created_at, updated_at
                )
                SELECT
                    i.review_id,
                    i.parking_spot_id,
                    i.user_id,
                    u.user_name AS reviewer_name,
                    i.rating,
                    i.comment,
                    i.created_at,
                    i.updated_at
                FROM inserted AS i
                INNER JOIN users AS u ON i.user_id = u.user_id
            "#,
        )
        .bind(event.spot_id)
        .bind(event.reviewed_by)
        .bind(event.rating)
        .bind(&event.comment)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                AppError::UnprocessableEntity(
                    "you have already reviewed this parking spot".into(),
                )
            }
            _ => AppError::SpecificOperationError(e),
        })?;

        Ok(row.into())
    }

    async fn find_by_spot_id(&self, spot_id: SpotId) -> AppResult<Vec<Review>> {
        self.check_spot_exists(spot_id).await?;

        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
                SELECT
                    r.review_id,
                    r.parking_spot_id,
                    r.user_id,
                    u.user_name AS reviewer_name,
                    r.rating,
                    r.comment,
                    r.created_at,
                    r.updated_at
                FROM reviews AS r
                INNER JOIN users AS u ON r.user_id = u.user_id
                WHERE r.parking_spot_id = $1
                ORDER BY r.created_at DESC
            "#,
        )
        .bind(spot_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn rating_summary(&self, spot_id: SpotId) -> AppResult<SpotRatingSummary> {
        let row: (i64, Option<f64>) = sqlx::query_as(
            r#"
                SELECT
                    COUNT(*),
                    ROUND(AVG(rating)::numeric, 2)::float8
                FROM reviews
                WHERE parking_spot_id = $1
            "#,
        )
        .bind(spot_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(SpotRatingSummary {
            total_reviews: row.0,
            average_rating: row.1,
        })
    }

    async fn update(&self, event: UpdateReview) -> AppResult<()> {
        self.check_review_ownership(event.review_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                UPDATE reviews
                SET rating = COALESCE($1, rating),
                    comment = COALESCE($2, comment),
                    updated_at = CURRENT_TIMESTAMP
                WHERE review_id = $3
            "#,
        )
        .bind(event.rating)
        .bind(&event.comment)
        .bind(event.review_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no review has been updated".into(),
            ));
        }
        Ok(())
    }

    async fn delete(&self, event: DeleteReview) -> AppResult<()> {
        self.check_review_ownership(event.review_id, event.requested_user)
            .await?;

        let res = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(event.review_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no review has been deleted".into(),
            ));
        }
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<UserReview>> {
        let rows: Vec<UserReviewRow> = sqlx::query_as(
            r#"
                SELECT
                    r.review_id,
                    r.parking_spot_id,
                    s.location AS spot_location,
                    r.rating,
                    r.comment,
                    r.created_at,
                    r.updated_at
                FROM reviews AS r
                INNER JOIN parking_spots AS s ON r.parking_spot_id = s.spot_id
                WHERE r.user_id = $1
                ORDER BY r.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(UserReview::from).collect())
    }
}

impl ReviewRepositoryImpl {
    async fn check_spot_exists(&self, spot_id: SpotId) -> AppResult<()> {
        let row: Option<(SpotId,)> =
            sqlx::query_as("SELECT spot_id FROM parking_spots WHERE spot_id = $1")
                .bind(spot_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        match row {
            None => Err(AppError::EntityNotFound(format!(
                "parking spot {spot_id} not found"
            ))),
            Some(_) => Ok(()),
        }
    }

    async fn check_review_ownership(
        &self,
        review_id: ReviewId,
        requested_user: UserId,
    ) -> AppResult<()> {
        let row: Option<(UserId,)> =
            sqlx::query_as("SELECT user_id FROM reviews WHERE review_id = $1")
                .bind(review_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        match row {
            None => Err(AppError::EntityNotFound(format!(
                "review {review_id} not found"
            ))),
            Some((owner,)) if owner != requested_user => Err(AppError::ForbiddenOperation),
            Some(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::model::user::event::CreateUser;
    use kernel::repository::user::UserRepository;
    use sqlx::PgPool;

    async fn create_user(pool: &PgPool, name: &str, email: &str) -> UserId {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        repo.create(CreateUser {
            user_name: name.into(),
            email: email.into(),
            password: "passw0rd!".into(),
        })
        .await
        .unwrap()
        .user_id
    }

    async fn create_spot(pool: &PgPool, owner: UserId) -> SpotId {
        let row: (SpotId,) = sqlx::query_as(
            "INSERT INTO parking_spots (location, owned_by) VALUES ('123 Main St', $1) RETURNING spot_id",
        )
        .bind(owner)
        .fetch_one(pool)
        .await
        .unwrap();
        row.0
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn one_review_per_user_per_spot(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReviewRepositoryImpl::new(ConnectionPool::new(pool));

        let review = repo
            .create(CreateReview::new(spot_id, guest, 4, Some("Handy".into())))
            .await
            .unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.reviewer_name, "Gary Guest");

        let err = repo
            .create(CreateReview::new(spot_id, guest, 5, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn rating_summary_averages_reviews(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReviewRepositoryImpl::new(ConnectionPool::new(pool));

        let empty = repo.rating_summary(spot_id).await.unwrap();
        assert_eq!(empty.total_reviews, 0);
        assert!(empty.average_rating.is_none());

        repo.create(CreateReview::new(spot_id, guest, 4, None))
            .await
            .unwrap();
        repo.create(CreateReview::new(spot_id, other, 5, None))
            .await
            .unwrap();

        let summary = repo.rating_summary(spot_id).await.unwrap();
        assert_eq!(summary.total_reviews, 2);
        assert_eq!(summary.average_rating, Some(4.5));
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn only_the_author_may_update_or_delete(pool: PgPool) {
        let owner = create_user(&pool, "Olivia Owner", "olivia@example.com").await;
        let guest = create_user(&pool, "Gary Guest", "gary@example.com").await;
        let other = create_user(&pool, "Kate Keen", "kate@example.com").await;
        let spot_id = create_spot(&pool, owner).await;
        let repo = ReviewRepositoryImpl::new(ConnectionPool::new(pool));

        let review = repo
            .create(CreateReview::new(spot_id, guest, 2, Some("Tight".into())))
            .await
            .unwrap();

        let err = repo
            .update(UpdateReview::new(review.review_id, other, Some(5), None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));

        repo.update(UpdateReview::new(review.review_id, guest, Some(3), None))
            .await
            .unwrap();
        let reviews = repo.find_by_spot_id(spot_id).await.unwrap();
        assert_eq!(reviews[0].rating, 3);
        assert_eq!(reviews[0].comment.as_deref(), Some("Tight"));

        let err = repo
            .delete(DeleteReview::new(review.review_id, other))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));

        repo.delete(DeleteReview::new(review.review_id, guest))
            .await
            .unwrap();
        assert!(repo.find_by_spot_id(spot_id).await.unwrap().is_empty());
    }
}

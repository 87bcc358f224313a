use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ReviewId, SpotId, UserId},
    review::{Review, UserReview},
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub parking_spot_id: SpotId,
    pub user_id: UserId,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(value: ReviewRow) -> Self {
        let ReviewRow {
            review_id,
            parking_spot_id,
            user_id,
            reviewer_name,
            rating,
            comment,
            created_at,
            updated_at,
        } = value;
        Review {
            review_id,
            spot_id: parking_spot_id,
            reviewed_by: user_id,
            reviewer_name,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }
}

#[derive(FromRow)]
pub struct UserReviewRow {
    pub review_id: ReviewId,
    pub parking_spot_id: SpotId,
    pub spot_location: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserReviewRow> for UserReview {
    fn from(value: UserReviewRow) -> Self {
        let UserReviewRow {
            review_id,
            parking_spot_id,
            spot_location,
            rating,
            comment,
            created_at,
            updated_at,
        } = value;
        UserReview {
            review_id,
            spot_id: parking_spot_id,
            spot_location,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }
}

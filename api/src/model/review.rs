use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ReviewId, SpotId, UserId},
    review::{
        event::{CreateReview, UpdateReview},
        Review, SpotRatingSummary, UserReview,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(skip)]
    pub parking_spot_id: SpotId,
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
    #[garde(skip)]
    pub comment: Option<String>,
}

#[derive(new)]
pub struct CreateReviewRequestWithUser(CreateReviewRequest, UserId);

impl From<CreateReviewRequestWithUser> for CreateReview {
    fn from(value: CreateReviewRequestWithUser) -> Self {
        let CreateReviewRequestWithUser(
            CreateReviewRequest {
                parking_spot_id,
                rating,
                comment,
            },
            user_id,
        ) = value;
        CreateReview {
            spot_id: parking_spot_id,
            reviewed_by: user_id,
            rating,
            comment,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    #[garde(inner(range(min = 1, max = 5)))]
    pub rating: Option<i32>,
    #[garde(skip)]
    pub comment: Option<String>,
}

#[derive(new)]
pub struct UpdateReviewRequestWithIds(ReviewId, UserId, UpdateReviewRequest);

impl From<UpdateReviewRequestWithIds> for UpdateReview {
    fn from(value: UpdateReviewRequestWithIds) -> Self {
        let UpdateReviewRequestWithIds(review_id, user_id, UpdateReviewRequest { rating, comment }) =
            value;
        UpdateReview {
            review_id,
            requested_user: user_id,
            rating,
            comment,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub parking_spot_id: SpotId,
    pub user_id: UserId,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            spot_id,
            reviewed_by,
            reviewer_name,
            rating,
            comment,
            created_at,
            updated_at,
        } = value;
        Self {
            id: review_id,
            parking_spot_id: spot_id,
            user_id: reviewed_by,
            reviewer_name,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(value: Vec<Review>) -> Self {
        Self {
            reviews: value.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummaryResponse {
    pub total_reviews: i64,
    pub average_rating: f64,
}

impl From<SpotRatingSummary> for RatingSummaryResponse {
    fn from(value: SpotRatingSummary) -> Self {
        let SpotRatingSummary {
            total_reviews,
            average_rating,
        } = value;
        Self {
            total_reviews,
            average_rating: average_rating.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewResponse {
    pub id: ReviewId,
    pub parking_spot_id: SpotId,
    pub parking_spot_location: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserReview> for UserReviewResponse {
    fn from(value: UserReview) -> Self {
        let UserReview {
            review_id,
            spot_id,
            spot_location,
            rating,
            comment,
            created_at,
            updated_at,
        } = value;
        Self {
            id: review_id,
            parking_spot_id: spot_id,
            parking_spot_location: spot_location,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReviewsResponse {
    pub reviews: Vec<UserReviewResponse>,
}

impl From<Vec<UserReview>> for UserReviewsResponse {
    fn from(value: Vec<UserReview>) -> Self {
        Self {
            reviews: value.into_iter().map(UserReviewResponse::from).collect(),
        }
    }
}

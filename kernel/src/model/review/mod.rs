use crate::model::id::{ReviewId, SpotId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Review {
    pub review_id: ReviewId,
    pub spot_id: SpotId,
    pub reviewed_by: UserId,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A review as seen from its author's side, carrying the spot location
/// instead of the reviewer name.
#[derive(Debug)]
pub struct UserReview {
    pub review_id: ReviewId,
    pub spot_id: SpotId,
    pub spot_location: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SpotRatingSummary {
    pub total_reviews: i64,
    pub average_rating: Option<f64>,
}

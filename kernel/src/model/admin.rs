use crate::model::id::{ReviewId, SpotId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct UserSummary {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub spots_count: i64,
    pub reviews_count: i64,
}

#[derive(Debug)]
pub struct SpotSummary {
    pub spot_id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub reviews_count: i64,
    pub average_rating: Option<f64>,
}

#[derive(Debug)]
pub struct ReviewSummary {
    pub review_id: ReviewId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub spot_id: SpotId,
    pub spot_location: String,
}

#[derive(Debug)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_spots: i64,
    pub total_reviews: i64,
    pub available_spots: i64,
    pub new_users_30d: i64,
    pub new_spots_30d: i64,
    pub new_reviews_30d: i64,
    pub average_rating: Option<f64>,
}

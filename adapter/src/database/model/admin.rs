use chrono::{DateTime, Utc};
use kernel::model::{
    admin::{DashboardStats, ReviewSummary, SpotSummary, UserSummary},
    id::{ReviewId, SpotId, UserId},
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct UserSummaryRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub spots_count: i64,
    pub reviews_count: i64,
}

impl From<UserSummaryRow> for UserSummary {
    fn from(value: UserSummaryRow) -> Self {
        let UserSummaryRow {
            user_id,
            user_name,
            email,
            created_at,
            spots_count,
            reviews_count,
        } = value;
        UserSummary {
            user_id,
            user_name,
            email,
            created_at,
            spots_count,
            reviews_count,
        }
    }
}

#[derive(FromRow)]
pub struct SpotSummaryRow {
    pub spot_id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub reviews_count: i64,
    pub average_rating: Option<f64>,
}

impl From<SpotSummaryRow> for SpotSummary {
    fn from(value: SpotSummaryRow) -> Self {
        let SpotSummaryRow {
            spot_id,
            location,
            is_available,
            created_at,
            owner_name,
            owner_email,
            reviews_count,
            average_rating,
        } = value;
        SpotSummary {
            spot_id,
            location,
            is_available,
            created_at,
            owner_name,
            owner_email,
            reviews_count,
            average_rating,
        }
    }
}

#[derive(FromRow)]
pub struct ReviewSummaryRow {
    pub review_id: ReviewId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub parking_spot_id: SpotId,
    pub spot_location: String,
}

impl From<ReviewSummaryRow> for ReviewSummary {
    fn from(value: ReviewSummaryRow) -> Self {
        let ReviewSummaryRow {
            review_id,
            rating,
            comment,
            created_at,
            updated_at,
            reviewer_name,
            reviewer_email,
            parking_spot_id,
            spot_location,
        } = value;
        ReviewSummary {
            review_id,
            rating,
            comment,
            created_at,
            updated_at,
            reviewer_name,
            reviewer_email,
            spot_id: parking_spot_id,
            spot_location,
        }
    }
}

#[derive(FromRow)]
pub struct DashboardStatsRow {
    pub total_users: i64,
    pub total_spots: i64,
    pub total_reviews: i64,
    pub available_spots: i64,
    pub new_users_30d: i64,
    pub new_spots_30d: i64,
    pub new_reviews_30d: i64,
    pub average_rating: Option<f64>,
}

impl From<DashboardStatsRow> for DashboardStats {
    fn from(value: DashboardStatsRow) -> Self {
        let DashboardStatsRow {
            total_users,
            total_spots,
            total_reviews,
            available_spots,
            new_users_30d,
            new_spots_30d,
            new_reviews_30d,
            average_rating,
        } = value;
        DashboardStats {
            total_users,
            total_spots,
            total_reviews,
            available_spots,
            new_users_30d,
            new_spots_30d,
            new_reviews_30d,
            average_rating,
        }
    }
}

use chrono::{DateTime, Utc};
use kernel::model::{
    admin::{DashboardStats, ReviewSummary, SpotSummary, UserSummary},
    id::{ReviewId, SpotId, UserId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummariesResponse {
    pub users: Vec<UserSummaryResponse>,
}

impl From<Vec<UserSummary>> for UserSummariesResponse {
    fn from(value: Vec<UserSummary>) -> Self {
        Self {
            users: value.into_iter().map(UserSummaryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub parking_spots_count: i64,
    pub reviews_count: i64,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(value: UserSummary) -> Self {
        let UserSummary {
            user_id,
            user_name,
            email,
            created_at,
            spots_count,
            reviews_count,
        } = value;
        Self {
            id: user_id,
            name: user_name,
            email,
            created_at,
            parking_spots_count: spots_count,
            reviews_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotSummariesResponse {
    pub parking_spots: Vec<SpotSummaryResponse>,
}

impl From<Vec<SpotSummary>> for SpotSummariesResponse {
    fn from(value: Vec<SpotSummary>) -> Self {
        Self {
            parking_spots: value.into_iter().map(SpotSummaryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotSummaryResponse {
    pub id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_email: String,
    pub reviews_count: i64,
    pub average_rating: f64,
}

impl From<SpotSummary> for SpotSummaryResponse {
    fn from(value: SpotSummary) -> Self {
        let SpotSummary {
            spot_id,
            location,
            is_available,
            created_at,
            owner_name,
            owner_email,
            reviews_count,
            average_rating,
        } = value;
        Self {
            id: spot_id,
            location,
            is_available,
            created_at,
            owner_name,
            owner_email,
            reviews_count,
            average_rating: average_rating.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummariesResponse {
    pub reviews: Vec<ReviewSummaryResponse>,
}

impl From<Vec<ReviewSummary>> for ReviewSummariesResponse {
    fn from(value: Vec<ReviewSummary>) -> Self {
        Self {
            reviews: value.into_iter().map(ReviewSummaryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummaryResponse {
    pub id: ReviewId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub parking_spot_id: SpotId,
    pub parking_spot_location: String,
}

impl From<ReviewSummary> for ReviewSummaryResponse {
    fn from(value: ReviewSummary) -> Self {
        let ReviewSummary {
            review_id,
            rating,
            comment,
            created_at,
            updated_at,
            reviewer_name,
            reviewer_email,
            spot_id,
            spot_location,
        } = value;
        Self {
            id: review_id,
            rating,
            comment,
            created_at,
            updated_at,
            reviewer_name,
            reviewer_email,
            parking_spot_id: spot_id,
            parking_spot_location: spot_location,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub totals: StatsTotals,
    pub recent: StatsRecent,
    pub average_rating: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTotals {
    pub users: i64,
    pub parking_spots: i64,
    pub reviews: i64,
    pub available_spots: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecent {
    pub new_users: i64,
    pub new_spots: i64,
    pub new_reviews: i64,
}

impl From<DashboardStats> for StatsResponse {
    fn from(value: DashboardStats) -> Self {
        let DashboardStats {
            total_users,
            total_spots,
            total_reviews,
            available_spots,
            new_users_30d,
            new_spots_30d,
            new_reviews_30d,
            average_rating,
        } = value;
        Self {
            totals: StatsTotals {
                users: total_users,
                parking_spots: total_spots,
                reviews: total_reviews,
                available_spots,
            },
            recent: StatsRecent {
                new_users: new_users_30d,
                new_spots: new_spots_30d,
                new_reviews: new_reviews_30d,
            },
            average_rating: average_rating.unwrap_or(0.0),
        }
    }
}

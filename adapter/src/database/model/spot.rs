use chrono::{DateTime, Utc};
use kernel::model::{
    id::{SpotId, UserId},
    spot::Spot,
    user::SpotOwner,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SpotRow {
    pub spot_id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub owned_by: UserId,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<SpotRow> for Spot {
    fn from(value: SpotRow) -> Self {
        let SpotRow {
            spot_id,
            location,
            is_available,
            owned_by,
            owner_name,
            created_at,
        } = value;
        Spot {
            spot_id,
            location,
            is_available,
            owner: SpotOwner {
                owner_id: owned_by,
                owner_name,
            },
            created_at,
        }
    }
}

/// Listing row: the spot columns plus the window total for pagination.
#[derive(FromRow)]
pub struct PaginatedSpotRow {
    pub total: i64,
    pub spot_id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub owned_by: UserId,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<PaginatedSpotRow> for Spot {
    fn from(value: PaginatedSpotRow) -> Self {
        let PaginatedSpotRow {
            total: _,
            spot_id,
            location,
            is_available,
            owned_by,
            owner_name,
            created_at,
        } = value;
        Spot {
            spot_id,
            location,
            is_available,
            owner: SpotOwner {
                owner_id: owned_by,
                owner_name,
            },
            created_at,
        }
    }
}

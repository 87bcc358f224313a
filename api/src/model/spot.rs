use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{SpotId, UserId},
    list::PaginatedList,
    spot::{
        event::{CreateSpot, SpotListOptions, UpdateSpotLocation},
        Spot,
    },
    user::SpotOwner,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpotRequest {
    #[garde(length(min = 1, max = 255))]
    pub location: String,
}

#[derive(new)]
pub struct CreateSpotRequestWithUser(CreateSpotRequest, UserId);

impl From<CreateSpotRequestWithUser> for CreateSpot {
    fn from(value: CreateSpotRequestWithUser) -> Self {
        let CreateSpotRequestWithUser(CreateSpotRequest { location }, user_id) = value;
        CreateSpot {
            location,
            owned_by: user_id,
        }
    }
}

/// Owner edit. There is deliberately no availability field here: the flag
/// belongs to the reservation workflow alone.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpotRequest {
    #[garde(length(min = 1, max = 255))]
    pub location: String,
}

#[derive(new)]
pub struct UpdateSpotRequestWithIds(SpotId, UserId, UpdateSpotRequest);

impl From<UpdateSpotRequestWithIds> for UpdateSpotLocation {
    fn from(value: UpdateSpotRequestWithIds) -> Self {
        let UpdateSpotRequestWithIds(spot_id, user_id, UpdateSpotRequest { location }) = value;
        UpdateSpotLocation {
            spot_id,
            location,
            requested_user: user_id,
        }
    }
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpotListQuery {
    #[garde(range(min = 0))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
}

impl From<SpotListQuery> for SpotListOptions {
    fn from(value: SpotListQuery) -> Self {
        let SpotListQuery { limit, offset } = value;
        SpotListOptions { limit, offset }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotResponse {
    pub id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub owner: SpotOwnerResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Spot> for SpotResponse {
    fn from(value: Spot) -> Self {
        let Spot {
            spot_id,
            location,
            is_available,
            owner,
            created_at,
        } = value;
        Self {
            id: spot_id,
            location,
            is_available,
            owner: owner.into(),
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotOwnerResponse {
    pub owner_id: UserId,
    pub owner_name: String,
}

impl From<SpotOwner> for SpotOwnerResponse {
    fn from(value: SpotOwner) -> Self {
        let SpotOwner {
            owner_id,
            owner_name,
        } = value;
        Self {
            owner_id,
            owner_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedSpotResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<SpotResponse>,
}

impl From<PaginatedList<Spot>> for PaginatedSpotResponse {
    fn from(value: PaginatedList<Spot>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value;
        Self {
            total,
            limit,
            offset,
            items: items.into_iter().map(SpotResponse::from).collect(),
        }
    }
}
